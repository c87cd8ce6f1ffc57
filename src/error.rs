//! Error types for the summarization engine.

/// Errors surfaced by configuration validation.
///
/// Degenerate *inputs* (empty documents, all-stopword sentences, out-of-range
/// `top_n`) are never errors; they resolve to documented fallback values.
/// Only malformed configuration is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Damping factor outside the open interval `(0, 1)`.
    #[error("damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),
    /// Convergence tolerance must be a positive finite number.
    #[error("convergence tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    /// The iteration cap must allow at least one iteration.
    #[error("max_iterations must be at least 1")]
    ZeroIterationCap,
}
