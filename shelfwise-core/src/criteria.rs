//! User preferences for a single grading pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Genders accepted by the criteria collector.
pub const GENDERS: [&str; 3] = ["man", "woman", "other"];

const DEFAULT_INFO: &str = "I am looking for an interesting sci-fi book to read for leisure at home";

/// Immutable per-run preferences.
///
/// `gender` is kept exactly as typed; relevance lookups compare it
/// case-sensitively against `"man"` and `"woman"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub age: u32,
    pub max_price: f64,
    pub gender: String,
    pub info: String,
    pub interests: Vec<String>,
}

impl Criteria {
    pub fn new(age: u32, max_price: f64, gender: impl Into<String>, info: impl Into<String>) -> Self {
        let info = info.into();
        Self {
            age,
            max_price,
            gender: gender.into(),
            interests: tokenize(&info),
            info,
        }
    }

    /// True if any interest token equals one of `words`.
    pub fn mentions_any(&self, words: &[&str]) -> bool {
        self.interests.iter().any(|t| words.contains(&t.as_str()))
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self::new(18, 100.0, "woman", DEFAULT_INFO)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Age: {}, Max Price: {}, Gender: {}, Info: {}",
            self.age, self.max_price, self.gender, self.info
        )
    }
}

/// Whether `gender` belongs to [`GENDERS`], ignoring case.
pub fn is_valid_gender(gender: &str) -> bool {
    let g = gender.trim().to_lowercase();
    GENDERS.contains(&g.as_str())
}

/// Split free text into lower-cased interest tokens.
///
/// Leading/trailing punctuation is stripped so "football!" still counts as
/// "football". Order is preserved; duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        let tokens = tokenize("I like watching Football and drinking beer!");
        assert_eq!(
            tokens,
            vec!["i", "like", "watching", "football", "and", "drinking", "beer"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("... !!").is_empty());
    }

    #[test]
    fn test_default_criteria_display() {
        let c = Criteria::default();
        assert_eq!(
            c.to_string(),
            "Age: 18, Max Price: 100, Gender: woman, Info: I am looking for an \
             interesting sci-fi book to read for leisure at home"
        );
        assert!(c.interests.contains(&"sci-fi".to_string()));
    }

    #[test]
    fn test_gender_validation() {
        assert!(is_valid_gender("man"));
        assert!(is_valid_gender("Woman"));
        assert!(is_valid_gender(" other "));
        assert!(!is_valid_gender("robot"));
    }

    #[test]
    fn test_mentions_any() {
        let c = Criteria::new(22, 50.0, "man", "I love soccer");
        assert!(c.mentions_any(&["football", "soccer"]));
        assert!(!c.mentions_any(&["tennis"]));
    }
}
