//! Candidate phrase generation

use super::matcher::StopwordMatcher;

/// Generate candidate phrases from sentences.
///
/// Each sentence is split at stopwords and the non-empty fragments are
/// appended in document order. Fragments keep their original case and
/// spacing.
pub fn generate_candidates<'t, I>(sentences: I, matcher: &StopwordMatcher) -> Vec<&'t str>
where
    I: IntoIterator<Item = &'t str>,
{
    let mut candidates = Vec::new();
    for sentence in sentences {
        candidates.extend(
            matcher
                .split(sentence)
                .into_iter()
                .filter(|fragment| !fragment.is_empty()),
        );
    }
    candidates
}
