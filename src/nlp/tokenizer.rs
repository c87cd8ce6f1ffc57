//! Plain-text to [`Document`] conversion.
//!
//! A convenience splitter for callers who start from raw text: sentences end
//! at `.`, `!` or `?`, and tokens are whitespace-separated. Callers with a
//! real sentence splitter upstream should build the [`Document`] themselves.

use crate::types::{Document, Sentence};

/// Characters treated as sentence terminators.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split raw text into a [`Document`].
///
/// Empty fragments (consecutive terminators, trailing whitespace) are
/// dropped, so the resulting document contains no empty sentences.
pub fn document_from_text(text: &str) -> Document {
    text.split_terminator(TERMINATORS)
        .filter_map(|fragment| {
            let sentence = tokenize(fragment);
            (!sentence.is_empty()).then_some(sentence)
        })
        .collect()
}

/// Split one sentence fragment into word tokens on whitespace.
pub fn tokenize(fragment: &str) -> Sentence {
    Sentence::new(
        fragment
            .split_whitespace()
            .map(|w| w.to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminators() {
        let doc = document_from_text("One two. Three four! Five?");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.get(0).map(|s| s.text()), Some("One two".to_string()));
        assert_eq!(doc.get(2).map(|s| s.text()), Some("Five".to_string()));
    }

    #[test]
    fn test_drops_empty_fragments() {
        let doc = document_from_text("First... Second.");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_empty_text() {
        let doc = document_from_text("   ");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_tokenize_whitespace_runs() {
        let s = tokenize("  spaced \t out  ");
        assert_eq!(s.tokens, vec!["spaced", "out"]);
    }
}
