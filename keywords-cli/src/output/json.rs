//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use keywords_core::ScoredKeyword;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents and their keywords as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Keywords of one document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file
    pub file: String,
    /// Ranked keywords
    pub keywords: Vec<KeywordData>,
}

/// A single keyword
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordData {
    /// Phrase with surrounding whitespace removed
    pub phrase: String,
    /// RAKE score
    pub score: f64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, keywords: &[ScoredKeyword]) -> Result<()> {
        self.documents.push(DocumentData {
            file: source.to_string(),
            keywords: keywords
                .iter()
                .map(|keyword| KeywordData {
                    phrase: keyword.phrase.trim().to_string(),
                    score: keyword.score,
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
