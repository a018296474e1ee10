//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use keywords_core::ScoredKeyword;
use std::io::Write;

/// Markdown formatter - outputs a numbered keyword list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    keyword_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            keyword_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, keywords: &[ScoredKeyword]) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for (rank, keyword) in keywords.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. {} ({:.3})",
                rank + 1,
                keyword.phrase.trim(),
                keyword.score
            )?;
        }
        writeln!(self.writer)?;
        self.keyword_count += keywords.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total keywords: {}*", self.keyword_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
