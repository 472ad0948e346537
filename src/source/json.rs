use crate::source::Entry;
use anyhow::{Context, Result};
use serde_json::Value;

/// A JSON document holding either a single value or an array of values.
///
/// Values are not checked here; non-strings are rejected at conversion time.
pub fn parse(name: &str, content: &str) -> Result<Vec<Entry>> {
    let document: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON input: {}", name))?;

    let entries = match document {
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Entry {
                origin: format!("{}[{}]", name, i),
                value,
            })
            .collect(),
        value => vec![Entry {
            origin: name.to_string(),
            value,
        }],
    };

    Ok(entries)
}
