//! `sentrank`: extractive sentence summarization via graph-based ranking.
//!
//! The engine builds a cosine-similarity graph over a document's sentences,
//! runs power-iteration PageRank over the row-normalized similarity matrix,
//! and selects the top-N sentences in original document order.
//!
//! Scope:
//! - In-memory, single-document, fully materialized input
//! - Caller-provided tokenization (a basic splitter ships in [`nlp`])
//! - Deterministic output (stable rank sort, ties break to earlier sentences)
//!
//! Non-goals:
//! - Abstractive summarization or language-model scoring
//! - Multi-document or streaming/incremental ranking
//! - Text acquisition and persistence (those live with the caller)
//!
//! # Example
//!
//! ```
//! use sentrank::{document_from_text, summarize, StopwordSet};
//!
//! let doc = document_from_text(
//!     "Graph ranking scores sentences. Sentences gain score from similar \
//!      neighbors. Zebras gallop across savannas. The ranking converges to \
//!      stable sentence scores.",
//! );
//! let summary = summarize(&doc, 2, StopwordSet::for_language("en")).unwrap();
//! assert_eq!(summary.len(), 2);
//! // Output order follows the document, not the ranking.
//! assert!(summary.indices.windows(2).all(|w| w[0] < w[1]));
//! ```

pub mod error;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;

pub use error::Error;
pub use nlp::stopwords::StopwordSet;
pub use nlp::tokenizer::document_from_text;
pub use pagerank::{PowerIteration, RankResult};
pub use similarity::{sentence_similarity, SimilarityMatrix};
pub use summarizer::{Summarizer, SummarizerConfig, Summary};
pub use types::{Document, Sentence};

/// Summarize `document` down to at most `top_n` sentences with default
/// ranking parameters (`d = 0.85`, `eps = 1e-4`, 100-iteration cap).
///
/// Pass [`StopwordSet::empty()`] to rank over the full vocabulary.
pub fn summarize(
    document: &Document,
    top_n: usize,
    stopwords: StopwordSet,
) -> Result<Summary, Error> {
    Summarizer::new()
        .with_stopwords(stopwords)
        .summarize(document, top_n)
}
