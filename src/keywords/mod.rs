//! Keyword ranking
//!
//! Corpus frequency counting and per-record top-word extraction.

pub mod extractor;
pub mod frequency;
pub mod tokens;
