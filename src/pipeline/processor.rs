//! Dataset processor — runs the labeling stages over a whole corpus.
//!
//! Stages run in order:
//! 1. Clean every record, keeping priority words found in asides
//! 2. Build the corpus frequency map (which re-cleans without priority words)
//! 3. Extract a label for each cleaned record
//! 4. Assemble the output artifacts
//!
//! The classifier and stopword filter are generic parameters, so tests and
//! callers can swap either without touching the stages.

use tracing::{debug, info, warn};

use super::artifacts::ProcessedDataset;
use crate::config::LabelConfig;
use crate::errors::{LabelError, Result};
use crate::keywords::extractor::{KeywordExtractor, DEFAULT_MAX_WORDS};
use crate::keywords::frequency::FrequencyMap;
use crate::keywords::tokens::TokenFilter;
use crate::nlp::classifier::{LexiconClassifier, WordClassifier};
use crate::nlp::cleaner::clean_text;
use crate::nlp::stopwords::{StopwordFilter, Stopwords};
use crate::types::WordLists;

/// Number of top corpus words echoed at debug level.
const TOP_WORDS_LOGGED: usize = 10;

/// Labels every record of a dataset.
#[derive(Debug, Clone)]
pub struct DatasetProcessor<C = LexiconClassifier, S = StopwordFilter> {
    filter: TokenFilter<C, S>,
    max_words: usize,
}

impl Default for DatasetProcessor {
    fn default() -> Self {
        Self::new(TokenFilter::default())
    }
}

impl DatasetProcessor {
    /// Build the default processor for a validated configuration.
    pub fn from_config(config: &LabelConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::new(&config.stopword_language).ok_or_else(|| {
            LabelError::Configuration(format!(
                "unsupported stopword language '{}'",
                config.stopword_language
            ))
        })?;
        let filter = TokenFilter::new(LexiconClassifier::new(), stopwords);
        Ok(Self::new(filter).with_max_words(config.max_words))
    }
}

impl<C: WordClassifier, S: Stopwords> DatasetProcessor<C, S> {
    pub fn new(filter: TokenFilter<C, S>) -> Self {
        Self {
            filter,
            max_words: DEFAULT_MAX_WORDS,
        }
    }

    /// Set the maximum number of words per label
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Labels for `records`, aligned by index.
    pub fn labels<T: AsRef<str>>(&self, records: &[T], lists: &WordLists) -> (Vec<String>, usize) {
        let cleaned: Vec<String> = records
            .iter()
            .map(|r| clean_text(r.as_ref(), lists.priority()))
            .collect();
        debug!("Cleaned records - count={}", cleaned.len());

        let freq = FrequencyMap::build(&cleaned, lists, &self.filter);
        if freq.is_empty() && !records.is_empty() {
            warn!("No countable words found in {} records", records.len());
        }
        debug!("Top corpus words: {:?}", freq.top_n(TOP_WORDS_LOGGED));

        let extractor = KeywordExtractor::new(&self.filter, lists).with_max_words(self.max_words);
        let processed = cleaned
            .iter()
            .map(|line| extractor.extract(line, &freq))
            .collect();

        (processed, freq.len())
    }

    /// Label every record and assemble both output artifacts.
    pub fn process(&self, records: Vec<String>, lists: &WordLists) -> ProcessedDataset {
        let (processed, vocabulary) = self.labels(&records, lists);
        let dataset = ProcessedDataset::assemble(records, processed, vocabulary);

        info!(
            "Processing complete - records={}, vocabulary={}, distinct_labels={}, empty_labels={}",
            dataset.stats.records,
            dataset.stats.vocabulary,
            dataset.stats.distinct_labels,
            dataset.stats.empty_labels
        );

        dataset
    }
}
