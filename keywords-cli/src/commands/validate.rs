//! Validate command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use keywords_core::{Config, Extractor};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the stoplist file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub stopwords: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating stoplist: {}", self.stopwords.display());

        let stopwords = FileReader::read_stoplist(&self.stopwords)?;
        if stopwords.is_empty() {
            println!("✗ Stoplist is invalid!");
            println!("  Error: no stopwords found");
            return Err(CliError::ConfigError("stoplist is empty".to_string()).into());
        }

        match Extractor::with_config(Config::builder().stopwords(stopwords.iter()).build()) {
            Ok(extractor) => {
                println!("✓ Stoplist is valid!");
                println!("  Stopwords: {}", extractor.stopwords().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Stoplist is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
