//! Power iteration with a uniform teleport term.
//!
//! Update rule: `P' = (1 - d)/n + d * M^T . P`, stopping when the L1 delta
//! between iterates drops to the tolerance.
//!
//! Termination: the update is a contraction with factor at most `d < 1`, so
//! the delta shrinks geometrically and the tolerance is always reached for
//! finite input. Zero rows of `M` (sentences with no outgoing similarity)
//! leak their propagated mass, which only tightens the contraction; the
//! teleport term keeps every sentence at a positive floor of `(1 - d)/n`.
//! The iteration cap is a guard against pathological floating-point input,
//! not a substitute for the convergence argument.

use crate::similarity::SimilarityMatrix;

use super::RankResult;

/// Power-iteration PageRank over a row-stochastic-or-zero matrix.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor `d` in `(0, 1)`.
    pub damping: f64,
    /// L1 convergence tolerance.
    pub tolerance: f64,
    /// Safety cap on iterations.
    pub max_iterations: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

impl PowerIteration {
    /// Create with default settings (`d = 0.85`, `eps = 1e-4`, cap 100).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run the iteration to a fixed point.
    ///
    /// Degenerate inputs short-circuit: fewer than 2 sentences or an
    /// all-zero matrix return the uniform distribution, converged, zero
    /// iterations. Hitting the cap returns the current iterate with
    /// `converged = false`.
    pub fn run(&self, matrix: &SimilarityMatrix) -> RankResult {
        let n = matrix.len();
        if n < 2 || matrix.is_zero() {
            return RankResult::uniform(n);
        }

        let teleport = (1.0 - self.damping) / n as f64;
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.tolerance {
            iterations += 1;

            new_scores.fill(teleport);

            // M^T . P: row i of M distributes score[i] over its columns.
            for (i, &score) in scores.iter().enumerate() {
                if score == 0.0 {
                    continue;
                }
                for (j, &weight) in matrix.row(i).iter().enumerate() {
                    if weight > 0.0 {
                        new_scores[j] += self.damping * score * weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Zero rows leak mass during iteration; renormalize so the result
        // is a probability distribution.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        RankResult::new(scores, iterations, delta, delta <= self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordSet;
    use crate::types::{Document, Sentence};

    fn matrix_for(sentences: &[&[&str]]) -> SimilarityMatrix {
        let doc: Document = sentences.iter().map(|s| Sentence::from_words(s)).collect();
        SimilarityMatrix::build(&doc, &StopwordSet::empty())
    }

    #[test]
    fn test_scores_form_distribution() {
        let m = matrix_for(&[
            &["rank", "flows", "along", "edges"],
            &["edges", "carry", "rank"],
            &["flows", "converge", "eventually"],
        ]);
        let result = PowerIteration::new().run(&m);

        assert!(result.converged);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        for &s in &result.scores {
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_symmetric_pair_equal_scores() {
        let m = matrix_for(&[&["same", "words"], &["same", "words"]]);
        let result = PowerIteration::new().run(&m);
        assert!(result.converged);
        assert!((result.score(0) - result.score(1)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_matrix() {
        let m = matrix_for(&[]);
        let result = PowerIteration::new().run(&m);
        assert!(result.converged);
        assert!(result.scores.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_single_sentence_uniform() {
        let m = matrix_for(&[&["lonely"]]);
        let result = PowerIteration::new().run(&m);
        assert!(result.converged);
        assert_eq!(result.scores, vec![1.0]);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_all_zero_matrix_uniform() {
        // Three mutually disjoint sentences: every row is zero.
        let m = matrix_for(&[&["aa", "bb"], &["cc", "dd"], &["ee", "ff"]]);
        assert!(m.is_zero());
        let result = PowerIteration::new().run(&m);
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
        for &s in &result.scores {
            assert!((s - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_isolated_sentence_keeps_teleport_mass() {
        // Sentence 1 shares nothing; its row is zero but it still receives
        // the teleport floor every iteration.
        let m = matrix_for(&[
            &["common", "topic", "words"],
            &["disjoint", "island"],
            &["common", "topic", "again"],
            &["topic", "words", "repeat"],
        ]);
        let result = PowerIteration::new().run(&m);
        assert!(result.converged);
        assert!(result.score(1) > 0.0);
        // The island cannot out-rank connected sentences.
        for i in [0, 2, 3] {
            assert!(result.score(i) > result.score(1));
        }
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let m = matrix_for(&[
            &["power", "method", "runs"],
            &["method", "runs", "long"],
            &["power", "runs", "again"],
        ]);
        let pr = PowerIteration::new()
            .with_max_iterations(1)
            .with_tolerance(0.0);

        let out = pr.run(&m);
        assert_eq!(out.iterations, 1);
        assert!(!out.converged);
        // Best-effort scores are still a distribution.
        let sum: f64 = out.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_lower_damping_flattens_scores() {
        let m = matrix_for(&[
            &["hub", "topic", "words", "many"],
            &["hub", "topic"],
            &["unrelated", "island"],
        ]);
        let spread = |d: f64| {
            let r = PowerIteration::new().with_damping(d).run(&m);
            let max = r.scores.iter().cloned().fold(f64::MIN, f64::max);
            let min = r.scores.iter().cloned().fold(f64::MAX, f64::min);
            max - min
        };
        assert!(spread(0.95) > spread(0.5));
    }
}
