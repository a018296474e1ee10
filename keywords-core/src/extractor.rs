//! Keyword extraction facade

use crate::config::Config;
use crate::domain::{
    candidate_scores, generate_candidates, split_sentences, StopwordMatcher, WordScores,
};
use crate::error::Result;
use crate::output::KeywordScores;
use crate::stoplist::StopwordList;

/// RAKE keyword extractor.
///
/// The stopword pattern is compiled once at construction and shared by
/// every call to [`Extractor::run`]. `run` keeps no state between calls, so
/// one extractor can serve many threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    matcher: StopwordMatcher,
    config: Config,
}

impl Extractor {
    /// Create an extractor for a list of stopwords
    pub fn new<I, S>(stopwords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(Config::builder().stopwords(stopwords).build())
    }

    /// Create an extractor using the embedded English stoplist
    pub fn english() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an extractor from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let matcher = StopwordMatcher::compile(config.stopwords.iter())?;
        Ok(Self { matcher, config })
    }

    /// The configured stopwords
    pub fn stopwords(&self) -> &StopwordList {
        &self.config.stopwords
    }

    /// The extractor configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract scored candidate phrases from a text
    pub fn run(&self, text: &str) -> Result<KeywordScores> {
        let sentences = split_sentences(text);
        let candidates = generate_candidates(sentences.iter().copied(), &self.matcher);
        tracing::debug!(
            sentences = sentences.len(),
            candidates = candidates.len(),
            "generated candidates"
        );

        let word_scores = WordScores::from_candidates(candidates.iter().copied());
        tracing::trace!(words = word_scores.len(), "scored words");

        candidate_scores(candidates.iter().copied(), &word_scores)
    }

    /// Extract keywords from several independent documents.
    ///
    /// Results are returned per document, in input order. With the
    /// `parallel` feature documents are processed on the rayon pool.
    pub fn run_many<T>(&self, texts: &[T]) -> Result<Vec<KeywordScores>>
    where
        T: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            texts.par_iter().map(|text| self.run(text.as_ref())).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(|text| self.run(text.as_ref())).collect()
        }
    }
}
