//! Sentence similarity: term vectors, the cosine metric, and the pairwise
//! similarity matrix.
//!
//! Similarity is `1 - cosine_distance` between term-frequency vectors built
//! over the union vocabulary of a sentence pair. The vocabulary is pair-local
//! (never document-global), which bounds memory to the pair at hand.

pub mod matrix;
pub mod vector;

pub use matrix::SimilarityMatrix;
pub use vector::TermVector;

use crate::nlp::stopwords::StopwordSet;
use crate::types::Sentence;

/// Cosine similarity between two tokenized sentences.
///
/// Tokens are lower-cased before comparison; stopwords contribute zero
/// weight. If either side has no non-stopword tokens the vectors cannot be
/// normalized, and the result is defined as `0.0` rather than NaN.
///
/// The result is symmetric: `sentence_similarity(a, b) ==
/// sentence_similarity(b, a)`.
pub fn sentence_similarity(a: &Sentence, b: &Sentence, stopwords: &StopwordSet) -> f64 {
    let va = TermVector::from_sentence(a, stopwords);
    let vb = TermVector::from_sentence(b, stopwords);
    va.cosine(&vb)
}
