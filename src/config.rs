//! Run configuration.
//!
//! # JSON shape
//!
//! Every field is optional; missing fields take the defaults below.
//!
//! ```json
//! {
//!   "input_path": "./allcsv/moringa.csv",
//!   "ignored_words_path": "./ignored_words.json",
//!   "priority_words_path": "./allpriority/moringa_priority_words.json",
//!   "records_output_path": "./processed_data.json",
//!   "labels_output_path": "./processed_lines.json",
//!   "max_words": 4,
//!   "stopword_language": "en"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{LabelError, Result};
use crate::keywords::extractor::DEFAULT_MAX_WORDS;
use crate::nlp::stopwords::StopwordFilter;

/// Paths and labeling parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// CSV file with a header row
    pub input_path: PathBuf,
    /// JSON array of words to ignore
    pub ignored_words_path: PathBuf,
    /// JSON array of priority words, in precedence order
    pub priority_words_path: PathBuf,
    /// Destination for `{original, processed}` pairs
    pub records_output_path: PathBuf,
    /// Destination for the distinct labels
    pub labels_output_path: PathBuf,
    /// Maximum words per label
    pub max_words: usize,
    /// Language of the bundled stopword list
    pub stopword_language: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("./allcsv/moringa.csv"),
            ignored_words_path: PathBuf::from("./ignored_words.json"),
            priority_words_path: PathBuf::from("./allpriority/moringa_priority_words.json"),
            records_output_path: PathBuf::from("./processed_data.json"),
            labels_output_path: PathBuf::from("./processed_lines.json"),
            max_words: DEFAULT_MAX_WORDS,
            stopword_language: "en".to_string(),
        }
    }
}

impl LabelConfig {
    /// Load a configuration file, filling missing fields with defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LabelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| LabelError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_ignored_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignored_words_path = path.into();
        self
    }

    pub fn with_priority_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.priority_words_path = path.into();
        self
    }

    pub fn with_records_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.records_output_path = path.into();
        self
    }

    pub fn with_labels_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.labels_output_path = path.into();
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Check values that cannot be enforced by the types.
    pub fn validate(&self) -> Result<()> {
        if self.max_words == 0 {
            return Err(LabelError::Configuration(
                "max_words must be at least 1".to_string(),
            ));
        }
        if !StopwordFilter::is_supported(&self.stopword_language) {
            return Err(LabelError::Configuration(format!(
                "unsupported stopword language '{}' (supported: {})",
                self.stopword_language,
                StopwordFilter::SUPPORTED_LANGUAGES.join(", ")
            )));
        }
        Ok(())
    }
}
