//! Rapid Automatic Keyword Extraction (RAKE)
//!
//! Text is cut into sentences at punctuation, sentences are cut into
//! candidate phrases at stopwords, and each candidate is scored by the
//! co-occurrence statistics of its words: a word scores `degree /
//! frequency`, a phrase scores the sum of its words.
//!
//! # Example
//!
//! ```rust
//! use keywords_core::{Extractor, Order};
//!
//! let extractor = Extractor::new(["is", "a", "the", "of"]).unwrap();
//! let scores = extractor
//!     .run("Linear regression is a supervised learning algorithm.")
//!     .unwrap();
//!
//! let top = scores.top(1, Order::Descending);
//! assert_eq!(top[0].phrase.trim(), "supervised learning algorithm");
//! assert_eq!(top[0].score, 9.0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod output;
pub mod stoplist;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use domain::{is_number, split_sentences, split_words, StopwordMatcher, WordScores};
pub use error::{Error, Result};
pub use extractor::Extractor;
pub use output::{KeywordScores, Order, ScoredKeyword};
pub use stoplist::StopwordList;
