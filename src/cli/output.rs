use crate::{BatchResult, CaseStyle, Conversion, Converter};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    origin: String,
    input: Value,
    tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: String,
    total: usize,
    failed: usize,
    results: Vec<JsonResult>,
}

/// Converted values go to `out`, problems go to `err`.
pub fn print_results(
    out: &mut impl Write,
    err: &mut impl Write,
    result: &BatchResult,
    style: CaseStyle,
    format: OutputFormat,
    show_tokens: bool,
    colored_output: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(out, err, result, show_tokens, colored_output),
        OutputFormat::Json => print_json(out, result, style),
    }
}

fn print_text(
    out: &mut impl Write,
    err: &mut impl Write,
    result: &BatchResult,
    show_tokens: bool,
    colored_output: bool,
) -> Result<()> {
    for conversion in &result.conversions {
        match &conversion.output {
            Ok(_) if show_tokens => writeln!(out, "{}", conversion.tokens.join(" "))?,
            Ok(rendered) => writeln!(out, "{}", rendered)?,
            Err(e) => print_failure(err, conversion, &e.to_string(), colored_output)?,
        }
    }
    Ok(())
}

fn print_failure(
    err: &mut impl Write,
    conversion: &Conversion,
    message: &str,
    colored_output: bool,
) -> Result<()> {
    if colored_output {
        writeln!(
            err,
            "{} {} {}",
            conversion.origin.blue().bold(),
            message.red().bold(),
            format!("(got {})", conversion.input).dimmed()
        )?;
    } else {
        writeln!(err, "{} {} (got {})", conversion.origin, message, conversion.input)?;
    }
    Ok(())
}

fn print_json(out: &mut impl Write, result: &BatchResult, style: CaseStyle) -> Result<()> {
    let results = result
        .conversions
        .iter()
        .map(|c| JsonResult {
            origin: c.origin.clone(),
            input: c.input.clone(),
            tokens: c.tokens.clone(),
            output: c.output.as_ref().ok().cloned(),
            error: c.output.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    let output = JsonOutput {
        style: style.to_string(),
        total: result.conversions.len(),
        failed: result.failed_count,
        results,
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

pub fn print_summary(err: &mut impl Write, result: &BatchResult, colored: bool) -> Result<()> {
    if result.failed_count == 0 {
        return Ok(());
    }

    let value_word = if result.failed_count == 1 { "value" } else { "values" };
    if colored {
        writeln!(
            err,
            "{} {} {} of {} could not be converted",
            "✗".red().bold(),
            result.failed_count.to_string().red().bold(),
            value_word,
            result.conversions.len()
        )?;
    } else {
        writeln!(
            err,
            "✗ {} {} of {} could not be converted",
            result.failed_count,
            value_word,
            result.conversions.len()
        )?;
    }
    Ok(())
}

/// Every style with the given sample rendered in it, using the converter's rules.
pub fn print_styles(
    out: &mut impl Write,
    converter: &Converter,
    sample: &str,
    colored: bool,
) -> Result<()> {
    let tokens = converter.tokens(sample);
    for style in CaseStyle::ALL {
        let rendered = style.render(&tokens);
        if colored {
            writeln!(out, "  {:<10} {}", style.to_string().cyan().bold(), rendered.green())?;
        } else {
            writeln!(out, "  {:<10} {}", style.to_string(), rendered)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Entry;
    use crate::{convert_entries, Preset, TokenizerOptions};
    use serde_json::json;

    fn batch() -> BatchResult {
        let converter = Converter::new(&TokenizerOptions::unified(), CaseStyle::Kebab);
        convert_entries(
            &converter,
            vec![
                Entry::text("arg:1", "firstName"),
                Entry {
                    origin: "arg:2".to_string(),
                    value: json!(42),
                },
            ],
        )
    }

    fn render(format: OutputFormat, show_tokens: bool) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_results(
            &mut out,
            &mut err,
            &batch(),
            CaseStyle::Kebab,
            format,
            show_tokens,
            false,
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_text_output() {
        let (out, err) = render(OutputFormat::Text, false);
        assert_eq!(out, "first-name\n");
        assert_eq!(err, "arg:2 Input must be a string (got 42)\n");
    }

    #[test]
    fn test_token_output() {
        let (out, _) = render(OutputFormat::Text, true);
        assert_eq!(out, "first name\n");
    }

    #[test]
    fn test_json_output() {
        let (out, err) = render(OutputFormat::Json, false);
        assert!(err.is_empty());

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["style"], "kebab");
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["failed"], 1);
        assert_eq!(parsed["results"][0]["output"], "first-name");
        assert_eq!(parsed["results"][1]["error"], "Input must be a string");
        assert!(parsed["results"][1].get("output").is_none());
    }

    #[test]
    fn test_summary() {
        let mut err = Vec::new();
        print_summary(&mut err, &batch(), false).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "✗ 1 value of 2 could not be converted\n"
        );
    }

    #[test]
    fn test_styles_listing() {
        let mut out = Vec::new();
        print_styles(&mut out, &Converter::default(), "first name", false).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("camel      firstName"));
        assert!(out.contains("constant   FIRST_NAME"));
    }

    #[test]
    fn test_styles_listing_follows_preset() {
        let converter = Converter::new(&Preset::LegacyKebab.options(), CaseStyle::Kebab);
        let mut out = Vec::new();
        print_styles(&mut out, &converter, "user-id.v2", false).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("snake      user-id_v_2"));
        assert!(out.contains("dot        user-id.v.2"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
