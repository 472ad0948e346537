use crate::case::{CaseStyle, Preset, TokenizerOptions};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_style")]
    pub style: CaseStyle,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    #[serde(default = "default_delimiters")]
    pub delimiters: String,

    #[serde(default = "default_true")]
    pub split_case: bool,

    #[serde(default = "default_true")]
    pub split_digits: bool,
}

fn default_style() -> CaseStyle {
    CaseStyle::Kebab
}

fn default_delimiters() -> String {
    TokenizerOptions::unified().delimiters
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: default_style(),
            preset: None,
            delimiters: default_delimiters(),
            split_case: true,
            split_digits: true,
        }
    }
}

/// A config file layer. Unset keys leave the lower layer alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub style: Option<CaseStyle>,
    pub preset: Option<Preset>,
    pub delimiters: Option<String>,
    pub split_case: Option<bool>,
    pub split_digits: Option<bool>,
}

/// Settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<CaseStyle>,
    pub preset: Option<Preset>,
    pub delimiters: Option<String>,
    pub no_split_case: bool,
    pub no_split_digits: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let mut layers = Vec::new();
        if let Some(global_path) = Self::global_config_path() {
            layers.push(global_path);
        }
        layers.push(PathBuf::from(LOCAL_CONFIG_FILE));

        Self::load_from(&layers, overrides)
    }

    /// Apply each existing file in `paths` in order, then the overrides.
    pub fn load_from(paths: &[PathBuf], overrides: &Overrides) -> Result<Self> {
        let mut config = Self::default();

        for path in paths {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                config = config.merge(Self::from_file(path)?);
            }
        }

        Ok(config.apply(overrides))
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(style) = file.style {
            self.style = style;
        }
        if file.preset.is_some() {
            self.preset = file.preset;
        }
        if let Some(delimiters) = file.delimiters {
            self.delimiters = delimiters;
        }
        if let Some(split_case) = file.split_case {
            self.split_case = split_case;
        }
        if let Some(split_digits) = file.split_digits {
            self.split_digits = split_digits;
        }
        self
    }

    fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(style) = overrides.style {
            self.style = style;
        }
        if overrides.preset.is_some() {
            self.preset = overrides.preset;
        }
        if overrides.delimiters.is_some() || overrides.no_split_case || overrides.no_split_digits {
            self.expand_preset();
        }
        if let Some(delimiters) = &overrides.delimiters {
            self.delimiters = delimiters.clone();
        }
        if overrides.no_split_case {
            self.split_case = false;
        }
        if overrides.no_split_digits {
            self.split_digits = false;
        }
        self
    }

    /// Replace the preset with its rules so single fields can be overridden.
    fn expand_preset(&mut self) {
        if let Some(preset) = self.preset.take() {
            let options = preset.options();
            self.split_case = options.split_case;
            self.split_digits = options.split_digits;
            self.delimiters = options.delimiters;
        }
    }

    /// Tokenizer rules: the preset if one is set, otherwise the individual fields.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        match self.preset {
            Some(preset) => preset.options(),
            None => TokenizerOptions {
                split_case: self.split_case,
                split_digits: self.split_digits,
                delimiters: self.delimiters.clone(),
            },
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
