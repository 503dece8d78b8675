//! Address recognition for free-form result-card text.
//!
//! Result cards do not label their address; it is one of several
//! `·`-separated snippets next to the category and opening hours. Telling
//! it apart is a guess tuned to the current layout, so it sits behind a
//! trait and callers can swap in their own rule.

use std::sync::LazyLock;

use regex::Regex;

static STREET_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[A-Za-z]?\s+\S").expect("valid street number regex"));

/// Words that mark a comma-bearing snippet as a place description rather
/// than a postal address (e.g. `"Ferry Terminal, Pier 3"`).
pub const DEFAULT_EXCLUDED_WORDS: [&str; 3] = ["hotel", "restaurant", "ferry"];

/// Decides whether a text snippet is a postal address.
pub trait AddressHeuristic {
    fn looks_like_address(&self, text: &str) -> bool;
}

/// Default rule: longer than five characters with at least one letter,
/// contains a comma or starts with a street number, and mentions none of
/// the excluded words.
#[derive(Debug, Clone)]
pub struct CommaAddressHeuristic {
    excluded_words: Vec<String>,
}

impl CommaAddressHeuristic {
    /// Use a custom exclusion list. Matching is case-insensitive.
    #[must_use]
    pub fn with_excluded_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_words: words
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn excluded_words(&self) -> &[String] {
        &self.excluded_words
    }
}

impl Default for CommaAddressHeuristic {
    fn default() -> Self {
        Self::with_excluded_words(DEFAULT_EXCLUDED_WORDS)
    }
}

impl AddressHeuristic for CommaAddressHeuristic {
    fn looks_like_address(&self, text: &str) -> bool {
        let text = text.trim();
        if text.chars().count() <= 5 || !text.chars().any(char::is_alphabetic) {
            return false;
        }
        if !text.contains(',') && !STREET_NUMBER_RE.is_match(text) {
            return false;
        }
        let lower = text.to_lowercase();
        !self
            .excluded_words
            .iter()
            .any(|word| lower.contains(word.as_str()))
    }
}
