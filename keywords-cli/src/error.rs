//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Input that the extractor does not accept
    UnsupportedInput(String),
    /// Configuration error
    ConfigError(String),
    /// Extraction error from core
    ExtractionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::UnsupportedInput(path) => {
                write!(f, "Only .txt files are supported: {path}")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ExtractionError(msg) => write!(f, "Extraction error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_unsupported_input_display() {
        let error = CliError::UnsupportedInput("notes.pdf".to_string());
        assert_eq!(
            error.to_string(),
            "Only .txt files are supported: notes.pdf"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_extraction_error_display() {
        let error = CliError::ExtractionError("missing word score".to_string());
        assert_eq!(error.to_string(), "Extraction error: missing word score");
    }

    #[test]
    fn test_cli_error_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("a.txt".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "File not found: a.txt");
    }
}
