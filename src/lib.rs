pub mod case;
pub mod cli;
pub mod config;
pub mod source;

pub use case::{
    convert, convert_value, to_camel_case, to_constant_case, to_dot_case, to_kebab_case,
    to_pascal_case, to_snake_case, validate, CaseError, CaseStyle, Converter, Preset, Tokenizer,
    TokenizerOptions,
};
pub use config::Config;

use rayon::prelude::*;
use serde_json::Value;
use source::Entry;

/// Outcome of converting one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub origin: String,
    pub input: Value,
    pub tokens: Vec<String>,
    pub output: Result<String, CaseError>,
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub conversions: Vec<Conversion>,
    pub failed_count: usize,
}

/// Convert every entry in parallel, keeping input order.
pub fn convert_entries(converter: &Converter, entries: Vec<Entry>) -> BatchResult {
    let conversions: Vec<Conversion> = entries
        .into_par_iter()
        .map(|entry| {
            let (tokens, output) = match validate(Some(&entry.value)) {
                Ok(text) => {
                    let tokens = converter.tokens(text);
                    let output = converter.style().render(&tokens);
                    (tokens, Ok(output))
                }
                Err(err) => (Vec::new(), Err(err)),
            };
            Conversion {
                origin: entry.origin,
                input: entry.value,
                tokens,
                output,
            }
        })
        .collect();

    let failed_count = conversions.iter().filter(|c| c.output.is_err()).count();
    BatchResult {
        conversions,
        failed_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_entries_keeps_order_and_counts_failures() {
        let converter = Converter::new(&TokenizerOptions::unified(), CaseStyle::Camel);
        let entries = vec![
            Entry::text("a", "first name"),
            Entry {
                origin: "b".to_string(),
                value: json!(123),
            },
            Entry::text("c", "user-profile-2"),
        ];

        let result = convert_entries(&converter, entries);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.conversions[0].output, Ok("firstName".to_string()));
        assert_eq!(result.conversions[1].output, Err(CaseError::InvalidInput));
        assert_eq!(result.conversions[2].output, Ok("userProfile2".to_string()));
        assert_eq!(result.conversions[2].origin, "c");
        assert_eq!(result.conversions[2].tokens, vec!["user", "profile", "2"]);
        assert!(result.conversions[1].tokens.is_empty());
    }

    #[test]
    fn test_convert_entries_large_batch_order() {
        let converter = Converter::default();
        let entries: Vec<Entry> = (0..500)
            .map(|i| Entry::text(i.to_string(), &format!("item{}Name", i)))
            .collect();

        let result = convert_entries(&converter, entries);
        for (i, conversion) in result.conversions.iter().enumerate() {
            assert_eq!(conversion.output, Ok(format!("item-{}-name", i)));
        }
    }
}
