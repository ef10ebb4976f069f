//! Natural Language Processing components
//!
//! This module provides text cleaning, stopword filtering, word
//! classification, and plural merging.

pub mod classifier;
pub mod cleaner;
pub mod meaningful;
pub mod plural;
pub mod stopwords;
