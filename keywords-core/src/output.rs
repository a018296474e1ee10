//! Extraction results

use std::cmp::Ordering;
use std::collections::hash_map;
use std::collections::HashMap;

/// Sort order for ranked keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// Highest score first
    #[default]
    Descending,
    /// Lowest score first
    Ascending,
}

/// A candidate phrase with its score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredKeyword {
    /// Candidate text exactly as extracted
    pub phrase: String,
    /// Sum of the phrase's word scores
    pub score: f64,
}

/// Mapping from candidate phrase to score for one document.
///
/// Iteration order is unspecified; use [`KeywordScores::ranked`] or
/// [`KeywordScores::top`] for a deterministic ordering.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeywordScores {
    scores: HashMap<String, f64>,
}

impl KeywordScores {
    pub(crate) fn from_map(scores: HashMap<String, f64>) -> Self {
        Self { scores }
    }

    /// Score of a phrase
    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.scores.get(phrase).copied()
    }

    /// Whether a phrase was extracted
    pub fn contains(&self, phrase: &str) -> bool {
        self.scores.contains_key(phrase)
    }

    /// Number of distinct phrases
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no phrase was extracted
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over phrases and scores in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores
            .iter()
            .map(|(phrase, score)| (phrase.as_str(), *score))
    }

    /// All phrases sorted by score. Equal scores are ordered by phrase.
    pub fn ranked(&self, order: Order) -> Vec<ScoredKeyword> {
        let mut ranked: Vec<ScoredKeyword> = self
            .scores
            .iter()
            .map(|(phrase, score)| ScoredKeyword {
                phrase: phrase.clone(),
                score: *score,
            })
            .collect();

        ranked.sort_by(|a, b| {
            let by_score = match order {
                Order::Descending => b.score.total_cmp(&a.score),
                Order::Ascending => a.score.total_cmp(&b.score),
            };
            match by_score {
                Ordering::Equal => a.phrase.cmp(&b.phrase),
                other => other,
            }
        });
        ranked
    }

    /// The first `n` phrases of [`KeywordScores::ranked`]
    pub fn top(&self, n: usize, order: Order) -> Vec<ScoredKeyword> {
        let mut ranked = self.ranked(order);
        ranked.truncate(n);
        ranked
    }

    /// Consume into the underlying map
    pub fn into_map(self) -> HashMap<String, f64> {
        self.scores
    }

    /// Serialize as a JSON object of phrase to score
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.scores)?)
    }
}

impl IntoIterator for KeywordScores {
    type Item = (String, f64);
    type IntoIter = hash_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}
