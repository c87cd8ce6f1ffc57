//! Core document types.
//!
//! A [`Document`] is an ordered list of [`Sentence`]s, and a sentence is an
//! ordered list of word tokens. Sentence order is significant: it defines the
//! "original position" used when a summary is assembled, and every stage of
//! the engine preserves it.

use serde::{Deserialize, Serialize};

/// An ordered sequence of word tokens.
///
/// Empty sentences are valid input; they compare as dissimilar to everything
/// (similarity `0.0`) and end up with an all-zero similarity row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Word tokens in order. Case is preserved here; similarity lower-cases
    /// on comparison.
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a sentence from owned tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Create a sentence from string slices (handy in tests).
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            tokens: words.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Join tokens with single spaces into a display string.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl From<Vec<String>> for Sentence {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

/// An ordered collection of sentences to be summarized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Create a document from sentences, preserving their order.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Append a sentence at the end.
    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentence at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Iterate over sentences in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }

    /// Borrow the sentences as a slice.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }
}

impl From<Vec<Vec<String>>> for Document {
    fn from(sentences: Vec<Vec<String>>) -> Self {
        Self {
            sentences: sentences.into_iter().map(Sentence::from).collect(),
        }
    }
}

impl FromIterator<Sentence> for Document {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        Self {
            sentences: iter.into_iter().collect(),
        }
    }
}
