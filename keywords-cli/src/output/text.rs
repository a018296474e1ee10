//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use keywords_core::ScoredKeyword;
use std::io::Write;

/// Plain text formatter - outputs one `score<TAB>phrase` line per keyword
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter. With `headers`, each document is
    /// preceded by a `== source ==` line.
    pub fn new(writer: W, headers: bool) -> Self {
        Self { writer, headers }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, keywords: &[ScoredKeyword]) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "== {source} ==")?;
        }
        for keyword in keywords {
            writeln!(self.writer, "{:.3}\t{}", keyword.score, keyword.phrase.trim())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
