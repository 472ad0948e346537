use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// Absent, `null`, or any non-string value.
    #[error("Input must be a string")]
    InvalidInput,
}

/// Accept only textual values, returning the string unchanged.
pub fn validate(value: Option<&Value>) -> Result<&str, CaseError> {
    match value {
        Some(Value::String(text)) => Ok(text.as_str()),
        _ => Err(CaseError::InvalidInput),
    }
}

/// Trimmed text, or `None` when nothing is left to convert.
pub fn trimmed(text: &str) -> Option<&str> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_strings() {
        let value = json!("first name");
        assert_eq!(validate(Some(&value)), Ok("first name"));

        let empty = json!("");
        assert_eq!(validate(Some(&empty)), Ok(""));
    }

    #[test]
    fn test_validate_rejects_non_strings() {
        for value in [
            json!(null),
            json!(123),
            json!(1.5),
            json!(true),
            json!(["a"]),
            json!({"a": 1}),
        ] {
            assert_eq!(validate(Some(&value)), Err(CaseError::InvalidInput));
        }
        assert_eq!(validate(None), Err(CaseError::InvalidInput));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(CaseError::InvalidInput.to_string(), "Input must be a string");
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed("  user_id \n"), Some("user_id"));
        assert_eq!(trimmed(" \t\n"), None);
        assert_eq!(trimmed(""), None);
    }
}
