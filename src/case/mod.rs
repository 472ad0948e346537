pub mod input;
pub mod style;
pub mod tokenizer;

pub use input::{validate, CaseError};
pub use style::CaseStyle;
pub use tokenizer::{Preset, Tokenizer, TokenizerOptions};

use serde_json::Value;

/// A tokenizer configuration paired with an output style.
#[derive(Debug, Clone)]
pub struct Converter {
    tokenizer: Tokenizer,
    style: CaseStyle,
}

impl Converter {
    pub fn new(options: &TokenizerOptions, style: CaseStyle) -> Self {
        Self {
            tokenizer: Tokenizer::new(options),
            style,
        }
    }

    pub fn style(&self) -> CaseStyle {
        self.style
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Trimmed-input tokens; empty for blank input.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        match input::trimmed(text) {
            Some(text) => self.tokenizer.tokenize(text),
            None => Vec::new(),
        }
    }

    pub fn convert(&self, text: &str) -> String {
        render_with(&self.tokenizer, text, self.style)
    }

    pub fn convert_value(&self, value: Option<&Value>) -> Result<String, CaseError> {
        let text = validate(value)?;
        Ok(self.convert(text))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&TokenizerOptions::unified(), CaseStyle::Kebab)
    }
}

fn render_with(tokenizer: &Tokenizer, text: &str, style: CaseStyle) -> String {
    match input::trimmed(text) {
        Some(text) => style.render(&tokenizer.tokenize(text)),
        None => String::new(),
    }
}

/// Convert `text` to `style` with every boundary rule active.
pub fn convert(text: &str, style: CaseStyle) -> String {
    render_with(Tokenizer::unified(), text, style)
}

/// Validate a loosely-typed value, then convert it.
///
/// Absent values, `null` and non-strings fail with [`CaseError::InvalidInput`].
pub fn convert_value(value: Option<&Value>, style: CaseStyle) -> Result<String, CaseError> {
    let text = validate(value)?;
    Ok(convert(text, style))
}

/// `first name` -> `firstName`
pub fn to_camel_case(text: &str) -> String {
    convert(text, CaseStyle::Camel)
}

/// `firstName` -> `first-name`
pub fn to_kebab_case(text: &str) -> String {
    convert(text, CaseStyle::Kebab)
}

/// `SCREEN NAME` -> `screen.name`
pub fn to_dot_case(text: &str) -> String {
    convert(text, CaseStyle::Dot)
}

pub fn to_snake_case(text: &str) -> String {
    convert(text, CaseStyle::Snake)
}

pub fn to_pascal_case(text: &str) -> String {
    convert(text, CaseStyle::Pascal)
}

pub fn to_constant_case(text: &str) -> String {
    convert(text, CaseStyle::Constant)
}
