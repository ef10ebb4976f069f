//! Corpus-wide word frequencies
//!
//! Every countable token in every record adds one to its count. Each record is
//! cleaned again with no priority words before counting, so a priority word
//! only counts if it already sits outside any bracket aside in the input.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::tokens::TokenFilter;
use crate::nlp::classifier::WordClassifier;
use crate::nlp::cleaner::clean_text;
use crate::nlp::stopwords::Stopwords;
use crate::types::WordLists;

/// Token → occurrence count over the whole corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: FxHashMap<String, usize>,
}

impl FrequencyMap {
    /// Count tokens across `corpus`.
    pub fn build<T, C, S>(corpus: &[T], lists: &WordLists, filter: &TokenFilter<C, S>) -> Self
    where
        T: AsRef<str>,
        C: WordClassifier,
        S: Stopwords,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut total = 0usize;

        for record in corpus {
            let cleaned = clean_text(record.as_ref(), &[]);
            for word in filter.select(&cleaned, lists) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
                total += 1;
            }
        }

        debug!(
            "Frequency map built - records={}, vocabulary={}, tokens={}",
            corpus.len(),
            counts.len(),
            total
        );

        Self { counts }
    }

    /// Occurrences of `word`, zero if never seen
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent words, ties broken alphabetically
    pub fn top_n(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(w, &c)| (w.as_str(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

impl FromIterator<(String, usize)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
