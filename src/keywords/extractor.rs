//! Per-record keyword labels
//!
//! A label is the record's priority words (declared order) followed by its
//! remaining words ranked by corpus frequency, truncated and capitalized.

use rustc_hash::FxHashSet;

use super::frequency::FrequencyMap;
use super::tokens::TokenFilter;
use crate::nlp::classifier::WordClassifier;
use crate::nlp::cleaner::clean_text;
use crate::nlp::plural::normalize_plurals;
use crate::nlp::stopwords::Stopwords;
use crate::types::WordLists;

/// Default number of words in a label
pub const DEFAULT_MAX_WORDS: usize = 4;

/// Extracts the top words of a single record.
#[derive(Debug)]
pub struct KeywordExtractor<'a, C, S> {
    filter: &'a TokenFilter<C, S>,
    lists: &'a WordLists,
    max_words: usize,
}

impl<'a, C: WordClassifier, S: Stopwords> KeywordExtractor<'a, C, S> {
    pub fn new(filter: &'a TokenFilter<C, S>, lists: &'a WordLists) -> Self {
        Self {
            filter,
            lists,
            max_words: DEFAULT_MAX_WORDS,
        }
    }

    /// Set the maximum number of words in a label
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Ranked, lowercase keywords of `text`, at most `max_words` of them.
    pub fn top_words(&self, text: &str, freq: &FrequencyMap) -> Vec<String> {
        let cleaned = clean_text(text, self.lists.priority());
        let words = self.filter.select(&cleaned, self.lists);
        let words = normalize_plurals(&words);

        // Dedup, first occurrence wins.
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let unique: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|w| seen.insert(w))
            .collect();

        // Case-insensitive, one slot per distinct priority word.
        let priority_in_record = self
            .lists
            .priority_lowercase()
            .iter()
            .filter(|p| unique.contains(&p.as_str()))
            .map(String::as_str);

        let mut ranked: Vec<&str> = unique
            .iter()
            .copied()
            .filter(|w| !self.lists.is_priority(w) && freq.count(w) > 0)
            .collect();
        // Stable: equal counts keep record order.
        ranked.sort_by_key(|w| std::cmp::Reverse(freq.count(w)));

        priority_in_record
            .chain(ranked)
            .take(self.max_words)
            .map(str::to_string)
            .collect()
    }

    /// The record's label: top words capitalized and joined by spaces.
    pub fn extract(&self, text: &str, freq: &FrequencyMap) -> String {
        self.top_words(text, freq)
            .iter()
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Uppercase the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::classifier::LexiconClassifier;
    use crate::nlp::stopwords::StopwordFilter;

    fn filter() -> TokenFilter<LexiconClassifier, StopwordFilter> {
        TokenFilter::new(
            LexiconClassifier::new(),
            StopwordFilter::from_list(&["the", "a", "with"]),
        )
    }

    fn freq(entries: &[(&str, usize)]) -> FrequencyMap {
        entries.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("moringa"), "Moringa");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_ranked_by_frequency() {
        let filter = filter();
        let lists = WordLists::empty();
        let freq = freq(&[("tea", 1), ("moringa", 9), ("leaf", 4)]);

        let label = KeywordExtractor::new(&filter, &lists).extract("tea leaf moringa", &freq);
        assert_eq!(label, "Moringa Leaf Tea");
    }

    #[test]
    fn test_ties_keep_record_order() {
        let filter = filter();
        let lists = WordLists::empty();
        let freq = freq(&[("tea", 2), ("moringa", 2), ("leaf", 2)]);

        let label = KeywordExtractor::new(&filter, &lists).extract("leaf tea moringa", &freq);
        assert_eq!(label, "Leaf Tea Moringa");
    }

    #[test]
    fn test_truncated_to_max_words() {
        let filter = filter();
        let lists = WordLists::empty();
        let freq = freq(&[("aaa", 5), ("bbb", 4), ("ccc", 3), ("ddd", 2), ("eee", 1)]);
        let text = "eee ddd ccc bbb aaa";

        let extractor = KeywordExtractor::new(&filter, &lists);
        assert_eq!(extractor.extract(text, &freq), "Aaa Bbb Ccc Ddd");
        assert_eq!(extractor.with_max_words(2).extract(text, &freq), "Aaa Bbb");
    }

    #[test]
    fn test_words_missing_from_map_dropped() {
        let filter = filter();
        let lists = WordLists::empty();
        let freq = freq(&[("tea", 1)]);

        let label = KeywordExtractor::new(&filter, &lists).extract("tea powder", &freq);
        assert_eq!(label, "Tea");
    }

    #[test]
    fn test_priority_words_first_in_declared_order() {
        let filter = filter();
        let lists = WordLists::new(Vec::<String>::new(), ["Organic", "leaf"]);
        let freq = freq(&[("tea", 10), ("leaf", 1)]);

        // "organic" is only in an aside and has no corpus count.
        let label =
            KeywordExtractor::new(&filter, &lists).extract("tea leaf powder (organic)", &freq);
        assert_eq!(label, "Organic Leaf Tea");
    }

    #[test]
    fn test_priority_word_absent_from_record() {
        let filter = filter();
        let lists = WordLists::new(Vec::<String>::new(), ["organic"]);
        let freq = freq(&[("tea", 1)]);

        let label = KeywordExtractor::new(&filter, &lists).extract("tea", &freq);
        assert_eq!(label, "Tea");
    }

    #[test]
    fn test_repeated_priority_word_takes_one_slot() {
        let filter = filter();
        let lists = WordLists::new(Vec::<String>::new(), ["organic", "ORGANIC", "leaf"]);
        let freq = freq(&[("tea", 3), ("powder", 2)]);

        let label =
            KeywordExtractor::new(&filter, &lists).extract("organic leaf tea powder", &freq);
        assert_eq!(label, "Organic Leaf Tea Powder");
    }

    #[test]
    fn test_plurals_merged_before_ranking() {
        let filter = filter();
        let lists = WordLists::empty();
        let freq = freq(&[("leaf", 7), ("leaves", 3), ("tea", 5)]);

        // "leaf" folds into "leaves", which is then ranked by its own count.
        let label = KeywordExtractor::new(&filter, &lists).extract("leaf tea leaves", &freq);
        assert_eq!(label, "Tea Leaves");
    }

    #[test]
    fn test_ignored_words_excluded() {
        let filter = filter();
        let lists = WordLists::new(["acme"], Vec::<String>::new());
        let freq = freq(&[("acme", 50), ("tea", 1)]);

        let label = KeywordExtractor::new(&filter, &lists).extract("Acme tea", &freq);
        assert_eq!(label, "Tea");
    }

    #[test]
    fn test_empty_label() {
        let filter = filter();
        let lists = WordLists::empty();
        let label = KeywordExtractor::new(&filter, &lists).extract("the a with 123", &FrequencyMap::default());
        assert_eq!(label, "");
    }

    #[test]
    fn test_deterministic() {
        let filter = filter();
        let lists = WordLists::new(Vec::<String>::new(), ["leaf"]);
        let freq = freq(&[("tea", 3), ("powder", 3), ("leaf", 1), ("capsule", 2)]);
        let extractor = KeywordExtractor::new(&filter, &lists);
        let text = "Capsule powder, tea & leaf [leaf]";

        let first = extractor.extract(text, &freq);
        for _ in 0..10 {
            assert_eq!(extractor.extract(text, &freq), first);
        }
        assert!(first.split(' ').count() <= DEFAULT_MAX_WORDS);
        assert!(first.split(' ').all(|w| w.starts_with(|c: char| c.is_ascii_uppercase())));
    }
}
