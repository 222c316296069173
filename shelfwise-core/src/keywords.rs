//! Fuzzy keyword matching between user interests and per-genre reference words.
//!
//! Similarity is the normalised indel ratio (Levenshtein with substitution
//! cost 2), scaled to 0-100 and rounded.

use serde::Serialize;
use std::collections::HashMap;

use crate::book::Genre;

/// Minimum similarity (0-100) for a token to count as a hit.
pub const MATCH_THRESHOLD: u8 = 65;
/// Grade bonus per matched token.
pub const MATCH_INCREMENT: u32 = 15;

/// Outcome of matching interests against one genre's keywords.
///
/// `KeywordMatch::default()` is the neutral result used when the keyword
/// source is unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    pub increment: u32,
    pub count: usize,
}

/// Read-only provider of reference keywords, keyed by genre.
pub trait KeywordSource {
    /// Reference words for `genre`, or `None` when that source is missing.
    fn reference_words(&self, genre: Genre) -> Option<&[String]>;
}

/// In-memory keyword lists.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    words: HashMap<Genre, Vec<String>>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `words` for `genre`, lower-cased. Replaces any previous list.
    pub fn insert<I, S>(&mut self, genre: Genre, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.words.insert(genre, list);
    }

    /// Store whitespace-separated words from a keyword file body.
    pub fn insert_text(&mut self, genre: Genre, text: &str) {
        self.insert(genre, text.split_whitespace());
    }

    pub fn with(mut self, genre: Genre, words: &[&str]) -> Self {
        self.insert(genre, words.iter().copied());
        self
    }

    pub fn contains(&self, genre: Genre) -> bool {
        self.words.contains_key(&genre)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl KeywordSource for KeywordSet {
    fn reference_words(&self, genre: Genre) -> Option<&[String]> {
        self.words.get(&genre).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatcher {
    pub threshold: u8,
    pub increment: u32,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
            increment: MATCH_INCREMENT,
        }
    }
}

impl KeywordMatcher {
    pub fn new(threshold: u8, increment: u32) -> Self {
        Self { threshold, increment }
    }

    /// Count tokens that hit at least one reference word.
    ///
    /// Each token stops at its first hit, so it is counted at most once.
    pub fn match_tokens(&self, reference: &[String], tokens: &[String]) -> KeywordMatch {
        let mut out = KeywordMatch::default();
        for token in tokens {
            if reference.iter().any(|r| similarity(token, r) >= self.threshold) {
                out.increment = out.increment.saturating_add(self.increment);
                out.count += 1;
            }
        }
        out
    }

    /// Match against `genre`'s words from `source`.
    ///
    /// A missing source yields the neutral result and a warning; grading goes on.
    pub fn match_genre<K>(&self, source: &K, genre: Genre, tokens: &[String]) -> KeywordMatch
    where
        K: KeywordSource + ?Sized,
    {
        match source.reference_words(genre) {
            Some(reference) => self.match_tokens(reference, tokens),
            None => {
                tracing::warn!(genre = %genre, "no keyword source available; skipping keyword bonus");
                KeywordMatch::default()
            }
        }
    }
}

/// Similarity of two strings on a 0-100 scale.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let dist = indel_distance(&a, &b);
    let ratio = (total - dist) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

/// Edit distance where a substitution costs a deletion plus an insertion.
fn indel_distance(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=n {
            let sub = if a[i - 1] == b[j - 1] { 0 } else { 2 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
