//! # keyword-labeler
//!
//! Derives short keyword labels for tabular product records.
//!
//! Each record is cleaned, filtered down to meaningful words, and ranked
//! against word frequencies of the whole corpus. Priority words always lead
//! a label; ignored words never appear.
//!
//! ```rust,ignore
//! use keyword_labeler::{DatasetProcessor, WordLists};
//!
//! let records = vec!["Moringa Leaf Powder".to_string(), "Moringa Tea".to_string()];
//! let lists = WordLists::new(Vec::<String>::new(), ["organic"]);
//! let dataset = DatasetProcessor::default().process(records, &lists);
//! for record in &dataset.records {
//!     println!("{} -> {}", record.original, record.processed);
//! }
//! ```

pub mod config;
pub mod errors;
pub mod ingest;
pub mod keywords;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use config::LabelConfig;
pub use errors::{LabelError, Result};
pub use keywords::extractor::KeywordExtractor;
pub use keywords::frequency::FrequencyMap;
pub use keywords::tokens::TokenFilter;
pub use nlp::classifier::{LexiconClassifier, WordClasses, WordClassifier};
pub use nlp::stopwords::{StopwordFilter, Stopwords};
pub use pipeline::artifacts::{ProcessedDataset, ProcessedRecord, RunStats};
pub use pipeline::processor::DatasetProcessor;
pub use pipeline::runner::run;
pub use types::WordLists;
