//! Text preparation: stopword sets and a plain-text tokenizer.
//!
//! Both are collaborators of the ranking engine, not part of it: the engine
//! consumes any `Document` regardless of how it was split.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordSet;
pub use tokenizer::document_from_text;
