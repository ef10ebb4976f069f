//! Dataset pipeline
//!
//! In-memory processing of a whole corpus, its output artifacts, and the
//! file-level runner.

pub mod artifacts;
pub mod processor;
pub mod runner;
