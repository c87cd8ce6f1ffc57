//! Stopword sets for similarity weighting.
//!
//! A [`StopwordSet`] is an explicit parameter of the engine — there is no
//! ambient default list. The empty set is a valid choice and the
//! [`Default`] impl; language lists come from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A case-insensitive set of tokens excluded from similarity weighting.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    /// Stored lower-cased.
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// An empty set: no token is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a custom word list. Words are lower-cased on insertion.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load the standard list for a language code (e.g. `"en"`, `"de"`,
    /// `"fr"`, `"es"`). Unknown codes fall back to English.
    pub fn for_language(code: &str) -> Self {
        let lang = match code.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };
        Self {
            words: get(lang).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the set.
    pub fn extend_with(&mut self, words: &[&str]) {
        for word in words {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Membership test. The caller may pass any casing.
    pub fn contains(&self, word: &str) -> bool {
        // Fast path: similarity already lower-cases its tokens.
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set filters nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
