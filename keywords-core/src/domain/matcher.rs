//! Stopword matching
//!
//! All stopwords are compiled into one case-insensitive alternation. A
//! stopword only matches at a word boundary and only when it is not
//! followed by a word character or a hyphen, so `the` does not match inside
//! `theater` or `the-like`.
//!
//! The `regex` crate has no look-around, so the trailing guard is written
//! as a consuming group after the captured stopword. Scanning resumes at the
//! end of the capture, which leaves the guard character in the text for the
//! next fragment and for the next boundary check.

use crate::error::Result;
use regex::Regex;

const STOPWORD_GROUP: usize = 1;

/// Compiled stopword pattern that splits sentences into candidate fragments
#[derive(Debug, Clone)]
pub struct StopwordMatcher {
    /// `None` when no usable stopwords were supplied
    pattern: Option<Regex>,
}

impl StopwordMatcher {
    /// Compile a matcher from a list of stopwords.
    ///
    /// Stopwords are matched literally, in list order. Blank entries are
    /// ignored; a list with no usable entries yields a matcher that never
    /// splits.
    pub fn compile<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                (!word.is_empty()).then(|| regex::escape(word))
            })
            .collect();

        if alternatives.is_empty() {
            tracing::debug!("no stopwords supplied; matcher will not split");
            return Ok(Self { pattern: None });
        }

        let source = format!(r"(?i)\b({})(?:[^\w-]|\z)", alternatives.join("|"));
        let pattern = Regex::new(&source)?;
        tracing::debug!(stopwords = alternatives.len(), "compiled stopword pattern");

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// A matcher that never splits
    pub fn empty() -> Self {
        Self { pattern: None }
    }

    /// Whether this matcher has any stopwords
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Split a sentence at stopword occurrences.
    ///
    /// Returns the fragments between matches with the stopword text
    /// removed. Empty fragments are kept.
    pub fn split<'t>(&self, sentence: &'t str) -> Vec<&'t str> {
        let Some(pattern) = &self.pattern else {
            return vec![sentence];
        };

        let mut fragments = Vec::new();
        let mut last = 0;
        let mut pos = 0;

        while pos <= sentence.len() {
            let Some(stopword) = pattern
                .captures_at(sentence, pos)
                .and_then(|caps| caps.get(STOPWORD_GROUP))
            else {
                break;
            };

            fragments.push(&sentence[last..stopword.start()]);
            last = stopword.end();
            // Stopwords are non-empty, so the scan always advances
            pos = stopword.end();
        }

        fragments.push(&sentence[last..]);
        fragments
    }
}
