//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use keywords_core::StopwordList;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a document, refusing anything but `.txt` files unless
    /// `any_extension` is set
    pub fn read_document(path: &Path, any_extension: bool) -> Result<String> {
        if !any_extension && !Self::is_text_file(path) {
            return Err(CliError::UnsupportedInput(path.display().to_string()).into());
        }
        Self::read_text(path)
    }

    /// Read and parse a stoplist file
    pub fn read_stoplist(path: &Path) -> Result<StopwordList> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stoplist: {}", path.display()))?;
        Ok(StopwordList::parse(&content))
    }

    /// Whether a path has a `.txt` extension (any case)
    pub fn is_text_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
    }
}
