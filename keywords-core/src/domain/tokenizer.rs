//! Sentence and word segmentation
//!
//! Sentences are the scoping unit for candidate generation: stopword
//! splitting never joins text across a sentence delimiter. Words are the
//! unit of scoring and are always lower-cased and non-numeric.

use regex::Regex;
use std::sync::OnceLock;

/// Sentence delimiters: common punctuation, tab, backslash, quotes,
/// parentheses, right single quotation mark, en dash, or a hyphen with
/// whitespace on both sides.
const SENTENCE_DELIMITERS: &str = r#"[.!?,;:\t\\"()'\x{2019}\x{2013}]|\s-\s"#;

static SENTENCE_SPLITTER: OnceLock<Regex> = OnceLock::new();

fn sentence_splitter() -> &'static Regex {
    SENTENCE_SPLITTER.get_or_init(|| {
        Regex::new(SENTENCE_DELIMITERS).expect("sentence delimiter pattern is valid")
    })
}

/// Characters that may appear inside a word
#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '+' | '-' | '/')
}

/// Split text into sentence fragments.
///
/// Fragments are returned untrimmed and empty fragments are kept; the
/// candidate stage filters them.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_splitter().split(text).collect()
}

/// Split text into normalized words.
///
/// Everything outside `[a-zA-Z0-9_+\-/]` separates words. Each word is
/// trimmed and lower-cased; empty and numeric words are dropped. There is
/// no minimum word length.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(|ch: char| !is_word_char(ch))
        .filter_map(|fragment| {
            let word = fragment.trim().to_lowercase();
            if word.is_empty() || is_number(&word) {
                None
            } else {
                Some(word)
            }
        })
        .collect()
}

/// Check whether a string is a numeric literal.
///
/// A string containing `.` is numeric if it parses as a float; anything
/// else is numeric if it is an integer literal. Parse failures simply mean
/// "not a number".
pub fn is_number(word: &str) -> bool {
    let word = word.trim();
    if word.contains('.') {
        word.parse::<f64>().is_ok()
    } else {
        is_integer_literal(word)
    }
}

/// Base-10 integer literal of any length: optional sign, ASCII digits,
/// single underscores allowed between digits.
fn is_integer_literal(word: &str) -> bool {
    let digits = word
        .strip_prefix('+')
        .or_else(|| word.strip_prefix('-'))
        .unwrap_or(word);

    if digits.is_empty() {
        return false;
    }

    let mut prev_digit = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => prev_digit = true,
            '_' if prev_digit => prev_digit = false,
            _ => return false,
        }
    }

    // A trailing underscore leaves prev_digit false
    prev_digit
}
