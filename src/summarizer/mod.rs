//! Extractive summarization: configuration, orchestration, and output.
//!
//! [`Summarizer`] wires the stages together: similarity matrix, power
//! iteration, top-N selection. Each stage is a pure function of its inputs;
//! the summarizer itself holds only configuration and the stopword set, so
//! one instance can summarize any number of documents.

pub mod selector;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::nlp::stopwords::StopwordSet;
use crate::pagerank::PowerIteration;
use crate::similarity::SimilarityMatrix;
use crate::types::{Document, Sentence};

/// Enter a tracing span for a stage (when the `tracing` feature is enabled).
/// When disabled this is a no-op the compiler eliminates.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

/// Tunables for the ranking iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Damping factor `d`, the per-step probability of following a
    /// similarity edge instead of teleporting. Must be in `(0, 1)`.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// L1 convergence tolerance `eps`. Must be positive and finite.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Safety cap on power iterations. Must be at least 1.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_damping() -> f64 {
    0.85
}

fn default_tolerance() -> f64 {
    1e-4
}

fn default_max_iterations() -> usize {
    100
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SummarizerConfig {
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

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::InvalidDamping(self.damping));
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(Error::ZeroIterationCap);
        }
        Ok(())
    }
}

/// An extractive summary: selected sentences in original document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences, ordered by original position.
    pub sentences: Vec<Sentence>,
    /// Original document indices of the selected sentences, ascending.
    pub indices: Vec<usize>,
    /// Whether the rank iteration converged within the cap. `false` means
    /// the selection was made from best-effort scores.
    pub converged: bool,
    /// Power iterations performed (0 when ranking was skipped).
    pub iterations: usize,
}

impl Summary {
    /// Number of sentences in the summary.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the summary is empty.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Join the summary sentences into display text, one per line.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(Sentence::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Graph-based extractive summarizer.
///
/// ```
/// use sentrank::{Document, Sentence, StopwordSet, Summarizer};
///
/// let doc: Document = [
///     Sentence::from_words(&["rust", "guarantees", "memory", "safety"]),
///     Sentence::from_words(&["the", "borrow", "checker", "enforces", "safety"]),
///     Sentence::from_words(&["cargo", "builds", "rust", "projects"]),
/// ]
/// .into_iter()
/// .collect();
///
/// let summarizer = Summarizer::new().with_stopwords(StopwordSet::from_list(&["the"]));
/// let summary = summarizer.summarize(&doc, 2).unwrap();
/// assert_eq!(summary.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: StopwordSet,
}

impl Summarizer {
    /// Create a summarizer with default configuration and no stopwords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            stopwords: StopwordSet::empty(),
        }
    }

    /// Set the stopword set.
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Borrow the configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize a document down to at most `top_n` sentences.
    ///
    /// The result preserves original sentence order. `top_n` is clamped to
    /// the document length. Documents with fewer than 2 sentences are
    /// returned as-is (clamped to `top_n`) without invoking the ranking
    /// machinery. Identical inputs always produce identical output.
    pub fn summarize(&self, document: &Document, top_n: usize) -> Result<Summary, Error> {
        self.config.validate()?;

        let n = document.len();
        if n < 2 {
            let take = top_n.min(n);
            return Ok(Summary {
                sentences: document.sentences()[..take].to_vec(),
                indices: (0..take).collect(),
                converged: true,
                iterations: 0,
            });
        }

        trace_stage!("similarity_matrix");
        let matrix = SimilarityMatrix::build(document, &self.stopwords);

        trace_stage!("pagerank");
        let ranks = PowerIteration::new()
            .with_damping(self.config.damping)
            .with_tolerance(self.config.tolerance)
            .with_max_iterations(self.config.max_iterations)
            .run(&matrix);

        trace_stage!("select");
        let indices = selector::select_indices(&ranks.scores, top_n);
        let sentences = indices
            .iter()
            .filter_map(|&i| document.get(i).cloned())
            .collect();

        Ok(Summary {
            sentences,
            indices,
            converged: ranks.converged,
            iterations: ranks.iterations,
        })
    }
}
