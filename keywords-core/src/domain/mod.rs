//! RAKE pipeline stages: segmentation, stopword splitting, scoring

pub mod candidates;
pub mod matcher;
pub mod scoring;
pub mod tokenizer;

pub use candidates::generate_candidates;
pub use matcher::StopwordMatcher;
pub use scoring::{candidate_scores, WordScores, WordStats};
pub use tokenizer::{is_number, split_sentences, split_words};
