//! Word and candidate scoring
//!
//! Word score is `degree / frequency`, where a word's degree counts every
//! word it co-occurs with inside a candidate, itself included. A candidate
//! scores the sum of its word scores.

use super::tokenizer::split_words;
use crate::error::{Error, Result};
use crate::output::KeywordScores;
use std::collections::HashMap;

/// Per-word counter with get-or-zero lookup
#[derive(Debug, Clone, Default)]
struct CountTable {
    counts: HashMap<String, usize>,
}

impl CountTable {
    fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    fn add(&mut self, word: &str, amount: usize) {
        match self.counts.get_mut(word) {
            Some(count) => *count += amount,
            None => {
                self.counts.insert(word.to_string(), amount);
            }
        }
    }

    fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

/// Co-occurrence statistics for a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStats {
    /// Number of occurrences across all candidates
    pub frequency: usize,
    /// Co-occurrence degree, including the word's own occurrences
    pub degree: usize,
}

impl WordStats {
    /// `degree / frequency`
    pub fn score(&self) -> f64 {
        self.degree as f64 / self.frequency as f64
    }
}

/// Word score table built from one document's candidates
#[derive(Debug, Clone, Default)]
pub struct WordScores {
    stats: HashMap<String, WordStats>,
}

impl WordScores {
    /// Compute degree and frequency for every word in the candidates.
    pub fn from_candidates<'c, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = &'c str>,
    {
        let mut frequency = CountTable::default();
        let mut degree = CountTable::default();

        for candidate in candidates {
            let words = split_words(candidate);
            // Zero-word candidates never enter the loop below
            let association = words.len().saturating_sub(1);
            for word in &words {
                frequency.add(word, 1);
                degree.add(word, association);
            }
        }

        // Frequency is final here; fold it into degree
        let stats = frequency
            .words()
            .map(|word| {
                let freq = frequency.get(word);
                let stats = WordStats {
                    frequency: freq,
                    degree: degree.get(word) + freq,
                };
                (word.to_string(), stats)
            })
            .collect();

        Self { stats }
    }

    /// Score of a word, if it occurred in any candidate
    pub fn get(&self, word: &str) -> Option<f64> {
        self.stats.get(word).map(WordStats::score)
    }

    /// Raw statistics of a word
    pub fn stats(&self, word: &str) -> Option<WordStats> {
        self.stats.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether the table has no words
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate over words and their scores in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.stats
            .iter()
            .map(|(word, stats)| (word.as_str(), stats.score()))
    }
}

/// Score every candidate by summing its word scores.
///
/// Results are keyed by the exact candidate text. A candidate that appears
/// more than once is stored once: each occurrence recomputes the same sum
/// from the same word table and overwrites the entry, so repeats do not
/// accumulate.
pub fn candidate_scores<'c, I>(candidates: I, word_scores: &WordScores) -> Result<KeywordScores>
where
    I: IntoIterator<Item = &'c str>,
{
    let mut scores = HashMap::new();

    for candidate in candidates {
        let mut total = 0.0;
        for word in split_words(candidate) {
            let score = word_scores
                .get(&word)
                .ok_or_else(|| Error::MissingWordScore {
                    word: word.clone(),
                    candidate: candidate.to_string(),
                })?;
            total += score;
        }
        scores.insert(candidate.to_string(), total);
    }

    Ok(KeywordScores::from_map(scores))
}
