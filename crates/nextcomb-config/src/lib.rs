//! Configuration for nextcomb benchmark runs.
//!
//! Describe which lengths, variants and inputs to sweep, and where to write
//! reports, in a TOML or YAML file instead of on the command line.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use nextcomb_config::{HarnessConfig, InputKind};
//! use nextcomb_core::Variant;
//!
//! let config = HarnessConfig::from_toml_str(r#"
//!     lengths = [8, 12]
//!     variants = ["reversal_scan", "gapped_rotation"]
//!
//!     [input]
//!     kind = "duplicates"
//!     values = 4
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.lengths, [8, 12]);
//! assert_eq!(config.variants, [Variant::ReversalScan, Variant::GappedRotation]);
//! assert_eq!(config.input, InputKind::Duplicates { values: 4, seed: 7 });
//! assert!(config.validate().is_ok());
//! ```
//!
//! Missing fields fall back to the defaults:
//!
//! ```
//! use nextcomb_config::HarnessConfig;
//!
//! let config = HarnessConfig::from_toml_str("").unwrap();
//! assert_eq!(config.lengths, [20]);
//! assert_eq!(config.variants.len(), 4);
//! ```

use std::path::{Path, PathBuf};

use nextcomb_core::Variant;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest sequence length a sweep accepts.
pub const MAX_LENGTH: usize = 64;

/// Length swept when none is configured.
pub const DEFAULT_LENGTH: usize = 20;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Benchmark harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Sequence lengths to sweep.
    #[serde(default = "default_lengths")]
    pub lengths: Vec<usize>,

    /// Variants to run, in report order.
    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,

    /// How input sequences are built.
    #[serde(default)]
    pub input: InputKind,

    /// Report destinations.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_lengths() -> Vec<usize> {
    vec![DEFAULT_LENGTH]
}

fn default_variants() -> Vec<Variant> {
    Variant::ALL.to_vec()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            lengths: default_lengths(),
            variants: default_variants(),
            input: InputKind::default(),
            output: OutputConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML; anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Replaces the swept lengths.
    pub fn with_lengths(mut self, lengths: impl IntoIterator<Item = usize>) -> Self {
        self.lengths = lengths.into_iter().collect();
        self
    }

    /// Replaces the variants.
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants = variants.into_iter().collect();
        self
    }

    /// Sets the input kind.
    pub fn with_input(mut self, input: InputKind) -> Self {
        self.input = input;
        self
    }

    /// Writes per-subset rows to a CSV file.
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.csv_path = Some(path.into());
        self
    }

    /// Writes a Markdown report.
    pub fn with_markdown_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.markdown_path = Some(path.into());
        self
    }

    /// Checks the configuration describes a runnable benchmark.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for empty length or variant lists,
    /// lengths above [`MAX_LENGTH`], and duplicate inputs drawn from zero
    /// values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lengths.is_empty() {
            return Err(ConfigError::Invalid("no lengths configured".to_string()));
        }
        if let Some(&n) = self.lengths.iter().find(|&&n| n > MAX_LENGTH) {
            return Err(ConfigError::Invalid(format!(
                "length {n} exceeds the maximum of {MAX_LENGTH}"
            )));
        }
        if self.variants.is_empty() {
            return Err(ConfigError::Invalid("no variants configured".to_string()));
        }
        if let InputKind::Duplicates { values: 0, .. } = self.input {
            return Err(ConfigError::Invalid(
                "duplicate input needs at least one distinct value".to_string(),
            ));
        }
        Ok(())
    }
}

/// How the harness fills a sequence of length `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    /// The values `0..n`.
    #[default]
    Distinct,

    /// `n` values drawn from `0..values` with a seeded generator, sorted.
    Duplicates { values: u32, seed: u64 },
}

/// Where reports are written, besides the text summary on stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// CSV file with one row per subset size.
    #[serde(default)]
    pub csv_path: Option<PathBuf>,

    /// Markdown report with a comparison table.
    #[serde(default)]
    pub markdown_path: Option<PathBuf>,
}
