//! Stopword lists
//!
//! The line format is the one used by RAKE stoplist files: a line whose
//! trimmed text starts with `#` is a comment, every other line holds zero or
//! more whitespace-separated stopwords.

use std::collections::HashSet;

/// Embedded default English stoplist
const ENGLISH: &str = include_str!("../configs/stopwords/english.txt");

/// Immutable, ordered list of lower-case stopwords without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordList {
    words: Vec<String>,
}

impl StopwordList {
    /// Build a list from words, lower-casing and dropping blanks and repeats.
    /// The first occurrence of a word decides its position.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty() && seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    /// Parse stoplist text.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .flat_map(str::split_whitespace),
        )
    }

    /// The embedded English stoplist
    pub fn english() -> Self {
        Self::parse(ENGLISH)
    }

    /// Append words not already present
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let incoming: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_string())
            .collect();
        *self = Self::new(self.words.iter().chain(incoming.iter()));
    }

    /// Whether a word is in the list, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stopwords in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The stopwords as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
