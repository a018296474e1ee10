//! Output formatting module

use anyhow::Result;
use keywords_core::{Order, ScoredKeyword};
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the ranked keywords of one document
    fn format_document(&mut self, source: &str, keywords: &[ScoredKeyword]) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `score<TAB>phrase` line per keyword
    #[default]
    Text,
    /// JSON array of documents with their keywords
    Json,
    /// Markdown numbered lists
    Markdown,
}

/// Ranking order of the printed keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Highest score first
    #[default]
    Desc,
    /// Lowest score first
    Asc,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Desc => Order::Descending,
            SortOrder::Asc => Order::Ascending,
        }
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
