//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for extraction:");
        println!(
            "   keywords extract -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented configuration template. Every value shown is the default.
const TEMPLATE: &str = r#"# keywords configuration
# Command-line flags take precedence over values in this file.

[extraction]
# Stoplist file, one or more whitespace-separated words per line.
# Lines starting with '#' are ignored. Relative paths are resolved
# against the directory of this file. Omit to use the built-in
# English list.
# stopwords = "stopwords.txt"

# Words appended to the selected stoplist
extra_stopwords = []

[output]
# text, json or markdown
format = "text"

# Keywords printed per document, 0 for all
top = 10

# desc (highest score first) or asc
order = "desc"

# Drop keywords scoring below this value
# min_score = 2.0

# Indent JSON output
pretty_json = true

[performance]
# Worker threads for multi-file extraction, 0 for one per core
threads = 0
"#;
