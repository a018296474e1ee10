//! Error types for keyword extraction

use thiserror::Error;

/// Errors raised while configuring an extractor or scoring a document
#[derive(Error, Debug)]
pub enum Error {
    /// The combined stopword pattern could not be compiled
    #[error("stopword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A candidate contains a word that has no entry in the word-score table.
    ///
    /// Candidates and the table are built from the same tokenizer, so this
    /// signals a broken invariant rather than bad input.
    #[error("no score for word '{word}' in candidate '{candidate}'")]
    MissingWordScore {
        /// The word that was looked up
        word: String,
        /// The candidate phrase being scored
        candidate: String,
    },

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for keyword extraction
pub type Result<T> = std::result::Result<T, Error>;
