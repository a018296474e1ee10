//! Configuration module
//!
//! Optional TOML file read with `--config`. Command-line flags take
//! precedence over values from the file.

use crate::output::{OutputFormat, SortOrder};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Extraction-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Stoplist file (default: embedded English list)
    pub stopwords: Option<PathBuf>,

    /// Stopwords appended to the selected list
    pub extra_stopwords: Vec<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Number of keywords per document
    pub top: usize,

    /// Sort order
    pub order: SortOrder,

    /// Drop keywords scoring below this value
    pub min_score: Option<f64>,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            top: 10,
            order: SortOrder::Desc,
            min_score: None,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output.top, 10);
        assert_eq!(config.output.order, SortOrder::Desc);
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[extraction]
stopwords = "stoplist.txt"
extra_stopwords = ["via", "per"]

[output]
format = "json"
top = 5
"#,
        )
        .unwrap();

        assert_eq!(
            config.extraction.stopwords,
            Some(PathBuf::from("stoplist.txt"))
        );
        assert_eq!(config.extraction.extra_stopwords, vec!["via", "per"]);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.top, 5);
        assert!(config.output.pretty_json);
        assert_eq!(config.performance.threads, 0);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(CliConfig::from_toml("[output\ntop = ").is_err());
        assert!(CliConfig::from_toml("[output]\nformat = \"yaml\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\norder = \"asc\"\n").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.order, SortOrder::Asc);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/keywords.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
