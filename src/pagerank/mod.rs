//! PageRank over the sentence-similarity matrix.
//!
//! Power iteration of the random-surfer model: a surfer follows similarity
//! edges with probability `d` and teleports uniformly with probability
//! `1 - d`. The stationary distribution is the per-sentence relevance score.

pub mod power;

pub use power::PowerIteration;

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Relevance score per sentence, indexed by original position.
    /// Non-negative and summing to 1 (a probability distribution).
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final L1 delta between the last two iterates.
    pub delta: f64,
    /// Whether the delta fell below the tolerance before the iteration cap.
    ///
    /// When `false` the scores are the best effort at the cap, still a valid
    /// distribution but not a fixed point.
    pub converged: bool,
}

impl RankResult {
    /// Create a new result.
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// The uniform distribution over `n` sentences, flagged as converged.
    ///
    /// Used for degenerate inputs (fewer than 2 sentences, all-zero matrix)
    /// where iteration is meaningless and the fixed point is uniform.
    pub fn uniform(n: usize) -> Self {
        let scores = if n == 0 {
            Vec::new()
        } else {
            vec![1.0 / n as f64; n]
        };
        Self::new(scores, 0, 0.0, true)
    }

    /// Score of the sentence at `index`, or `0.0` if out of range.
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }
}
