use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref CASE_BOUNDARY: Regex = Regex::new(r"(\p{Ll})(\p{Lu})").unwrap();
    static ref LETTER_DIGIT: Regex = Regex::new(r"(\p{L})([0-9])").unwrap();
    static ref DIGIT_LETTER: Regex = Regex::new(r"([0-9])(\p{L})").unwrap();
    static ref UNIFIED: Tokenizer = Tokenizer::new(&TokenizerOptions::unified());
}

/// Which boundary rules the tokenizer applies.
///
/// Whitespace always counts as a delimiter; `delimiters` lists the extra
/// punctuation that separates words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerOptions {
    pub split_case: bool,
    pub split_digits: bool,
    pub delimiters: String,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::unified()
    }
}

impl TokenizerOptions {
    /// Every rule active, `_ - .` plus whitespace as delimiters.
    pub fn unified() -> Self {
        Self {
            split_case: true,
            split_digits: true,
            delimiters: "_-.".to_string(),
        }
    }

    /// Older camelCase behavior: `_ - .` split words, digits stick to letters.
    pub fn legacy_camel() -> Self {
        Self {
            split_case: true,
            split_digits: false,
            delimiters: "_-.".to_string(),
        }
    }

    /// Older kebab-case behavior: periods split words, hyphens do not.
    pub fn legacy_kebab() -> Self {
        Self {
            split_case: true,
            split_digits: true,
            delimiters: "_.".to_string(),
        }
    }

    /// Older dot.case behavior: periods stay inside words, digits stick to letters.
    pub fn legacy_dot() -> Self {
        Self {
            split_case: true,
            split_digits: false,
            delimiters: "_-".to_string(),
        }
    }
}

/// Named [`TokenizerOptions`] presets, selectable from config and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Unified,
    LegacyCamel,
    LegacyKebab,
    LegacyDot,
}

impl Preset {
    pub fn options(self) -> TokenizerOptions {
        match self {
            Preset::Unified => TokenizerOptions::unified(),
            Preset::LegacyCamel => TokenizerOptions::legacy_camel(),
            Preset::LegacyKebab => TokenizerOptions::legacy_kebab(),
            Preset::LegacyDot => TokenizerOptions::legacy_dot(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "unified" => Ok(Preset::Unified),
            "legacy-camel" => Ok(Preset::LegacyCamel),
            "legacy-kebab" => Ok(Preset::LegacyKebab),
            "legacy-dot" => Ok(Preset::LegacyDot),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Unified => write!(f, "unified"),
            Preset::LegacyCamel => write!(f, "legacy-camel"),
            Preset::LegacyKebab => write!(f, "legacy-kebab"),
            Preset::LegacyDot => write!(f, "legacy-dot"),
        }
    }
}

/// Splits text into lowercase word tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    options: TokenizerOptions,
    delimiter_run: Regex,
}

impl Tokenizer {
    pub fn new(options: &TokenizerOptions) -> Self {
        let extra: String = options
            .delimiters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        // Escaped single characters inside a class always form a valid pattern
        let delimiter_run = Regex::new(&format!(r"[\s{}]+", extra)).unwrap();

        Self {
            options: options.clone(),
            delimiter_run,
        }
    }

    /// The shared tokenizer with every rule active.
    pub fn unified() -> &'static Tokenizer {
        &UNIFIED
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut marked = text.to_string();

        // Boundaries are marked with a space, which every delimiter run matches
        if self.options.split_case {
            marked = CASE_BOUNDARY.replace_all(&marked, "$1 $2").into_owned();
        }
        if self.options.split_digits {
            marked = LETTER_DIGIT.replace_all(&marked, "$1 $2").into_owned();
            marked = DIGIT_LETTER.replace_all(&marked, "$1 $2").into_owned();
        }

        let tokens: Vec<String> = self
            .delimiter_run
            .split(&marked)
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| fragment.to_lowercase())
            .collect();

        tracing::trace!(input = text, ?tokens, "tokenized");
        tokens
    }
}
