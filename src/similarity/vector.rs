//! Sparse term-frequency vectors for sentences.
//!
//! A [`TermVector`] stores only the non-zero dimensions of a sentence's
//! bag-of-words vector, keyed by lower-cased token. A dense vector over the
//! union vocabulary of a pair would hold the same values, with stopword
//! slots pinned at zero; the sparse form simply omits those zeros, so dot
//! products and norms are identical.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordSet;
use crate::types::Sentence;

/// A sparse term-frequency vector with a precomputed L2 norm.
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// Non-zero dimensions: lower-cased token -> occurrence count.
    counts: FxHashMap<String, f64>,
    /// L2 norm of the counts.
    norm: f64,
}

impl TermVector {
    /// Build the term-frequency vector for a sentence.
    ///
    /// Tokens are lower-cased; stopwords are skipped entirely (their weight
    /// is zero either way).
    pub fn from_sentence(sentence: &Sentence, stopwords: &StopwordSet) -> Self {
        let mut counts: FxHashMap<String, f64> = FxHashMap::default();
        for token in &sentence.tokens {
            let lowered = token.to_lowercase();
            if stopwords.contains(&lowered) {
                continue;
            }
            *counts.entry(lowered).or_insert(0.0) += 1.0;
        }
        let norm = counts.values().map(|v| v * v).sum::<f64>().sqrt();
        Self { counts, norm }
    }

    /// Cosine similarity with another vector.
    ///
    /// If either vector is all-zero the cosine is undefined; this returns
    /// `0.0` in that case instead of dividing by zero.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        // Iterate the smaller map; missing keys contribute zero.
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = small
            .counts
            .iter()
            .filter_map(|(term, weight)| large.counts.get(term).map(|w| weight * w))
            .sum();
        dot / (self.norm * other.norm)
    }

    /// Whether the vector has no non-zero dimensions.
    pub fn is_zero(&self) -> bool {
        self.counts.is_empty()
    }

    /// L2 norm of the raw counts.
    pub fn norm(&self) -> f64 {
        self.norm
    }
}
