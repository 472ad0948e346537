pub mod json;
pub mod plaintext;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Lines,
}

impl SourceFormat {
    /// Detect input format from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => SourceFormat::Json,
            _ => SourceFormat::Lines,
        }
    }
}

/// One value to convert, with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub origin: String,
    pub value: Value,
}

impl Entry {
    pub fn text(origin: impl Into<String>, text: &str) -> Self {
        Self {
            origin: origin.into(),
            value: Value::String(text.to_string()),
        }
    }
}

/// Command-line arguments become one entry each.
pub fn from_args(args: &[String]) -> Vec<Entry> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| Entry::text(format!("arg:{}", i + 1), arg))
        .collect()
}

/// Read a file and extract its entries
pub fn read_file(path: &Path) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let name = path.display().to_string();

    match SourceFormat::from_path(path) {
        SourceFormat::Json => json::parse(&name, &content),
        SourceFormat::Lines => Ok(plaintext::parse(&name, &content)),
    }
}

pub fn read_stdin() -> Result<Vec<Entry>> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read standard input")?;
    Ok(plaintext::parse("stdin", &content))
}
