//! Pairwise sentence-similarity matrix.
//!
//! Dense row-major storage: documents here are tens to hundreds of
//! sentences, where an `n x n` `Vec<f64>` is both the simplest and the
//! fastest layout for the row sweeps PageRank performs.

use rayon::prelude::*;

use super::vector::TermVector;
use crate::nlp::stopwords::StopwordSet;
use crate::types::Document;

/// A square, row-normalized sentence-similarity matrix.
///
/// After construction every row either sums to 1 (a transition-probability
/// row) or is all-zero (the sentence shares no non-stopword vocabulary with
/// any other sentence). The diagonal is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major entries, length `n * n`.
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the row-stochastic similarity matrix for a document.
    ///
    /// Each sentence is vectorized once; rows are then filled in parallel.
    /// The output is a pure function of sentence content and the stopword
    /// set.
    pub fn build(document: &Document, stopwords: &StopwordSet) -> Self {
        let n = document.len();
        let vectors: Vec<TermVector> = document
            .iter()
            .map(|s| TermVector::from_sentence(s, stopwords))
            .collect();

        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let mut row: Vec<f64> = (0..n)
                    .map(|j| {
                        if i == j {
                            0.0
                        } else {
                            vectors[i].cosine(&vectors[j])
                        }
                    })
                    .collect();
                let sum: f64 = row.iter().sum();
                // Zero-sum rows stay zero: the sentence emits no transition
                // mass but can still receive rank from others.
                if sum > 0.0 {
                    for value in &mut row {
                        *value /= sum;
                    }
                }
                row
            })
            .collect();

        Self {
            n,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of sentences (rows and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix is 0 x 0.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// Borrow row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    /// Sum of row `i`.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn doc(sentences: &[&[&str]]) -> Document {
        sentences.iter().map(|s| Sentence::from_words(s)).collect()
    }

    #[test]
    fn test_diagonal_is_zero() {
        let d = doc(&[
            &["rust", "is", "fast"],
            &["rust", "is", "safe"],
            &["go", "is", "simple"],
        ]);
        let m = SimilarityMatrix::build(&d, &StopwordSet::empty());
        for i in 0..m.len() {
            assert_eq!(m.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_rows_stochastic_or_zero() {
        let d = doc(&[
            &["the", "cat", "sat"],
            &["the", "cat", "ran"],
            &["dogs", "bark", "loudly"],
            &["cat", "ran", "home"],
        ]);
        let m = SimilarityMatrix::build(&d, &StopwordSet::empty());
        for i in 0..m.len() {
            let sum = m.row_sum(i);
            let all_zero = m.row(i).iter().all(|&v| v == 0.0);
            assert!(
                all_zero || (sum - 1.0).abs() < 1e-9,
                "row {i} sums to {sum}"
            );
        }
    }

    #[test]
    fn test_isolated_sentence_has_zero_row() {
        let d = doc(&[
            &["shared", "words", "here"],
            &["totally", "unrelated", "vocabulary"],
            &["shared", "words", "again"],
        ]);
        let m = SimilarityMatrix::build(&d, &StopwordSet::empty());
        assert!(m.row(1).iter().all(|&v| v == 0.0));
        assert!(m.row_sum(0) > 0.0);
    }

    #[test]
    fn test_single_sentence_is_zero_matrix() {
        let d = doc(&[&["only", "one", "sentence"]]);
        let m = SimilarityMatrix::build(&d, &StopwordSet::empty());
        assert_eq!(m.len(), 1);
        assert!(m.is_zero());
    }

    #[test]
    fn test_empty_document() {
        let m = SimilarityMatrix::build(&Document::default(), &StopwordSet::empty());
        assert!(m.is_empty());
        assert!(m.is_zero());
    }

    #[test]
    fn test_entries_non_negative() {
        let d = doc(&[&["a", "b"], &["b", "c"], &["c", "a"]]);
        let m = SimilarityMatrix::build(&d, &StopwordSet::empty());
        for i in 0..m.len() {
            for &v in m.row(i) {
                assert!(v >= 0.0);
                assert!(v.is_finite());
            }
        }
    }

    #[test]
    fn test_deterministic_rebuild() {
        let d = doc(&[
            &["power", "iteration", "converges"],
            &["iteration", "count", "is", "bounded"],
            &["power", "method", "again"],
        ]);
        let stop = StopwordSet::from_list(&["is"]);
        let m1 = SimilarityMatrix::build(&d, &stop);
        let m2 = SimilarityMatrix::build(&d, &stop);
        assert_eq!(m1, m2);
    }
}
