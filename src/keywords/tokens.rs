//! Token selection shared by counting and extraction

use crate::nlp::classifier::{LexiconClassifier, WordClassifier};
use crate::nlp::meaningful::MeaningfulnessFilter;
use crate::nlp::stopwords::{StopwordFilter, Stopwords};
use crate::types::WordLists;

/// Picks the countable tokens out of cleaned text.
///
/// Both the frequency builder and the extractor select tokens the same way:
/// drop ignored words, drop stopwords, keep meaningful words.
#[derive(Debug, Clone)]
pub struct TokenFilter<C = LexiconClassifier, S = StopwordFilter> {
    meaningful: MeaningfulnessFilter<C>,
    stopwords: S,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(LexiconClassifier::new(), StopwordFilter::english())
    }
}

impl<C: WordClassifier, S: Stopwords> TokenFilter<C, S> {
    pub fn new(classifier: C, stopwords: S) -> Self {
        Self {
            meaningful: MeaningfulnessFilter::new(classifier),
            stopwords,
        }
    }

    /// Countable tokens of `cleaned`, in order, duplicates kept.
    pub fn select<'t>(&self, cleaned: &'t str, lists: &WordLists) -> Vec<&'t str> {
        let words: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|w| !lists.is_ignored(w))
            .collect();

        self.stopwords
            .remove_stopwords(words)
            .into_iter()
            .filter(|w| self.meaningful.is_meaningful(w))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_applies_all_filters() {
        let filter = TokenFilter::new(
            LexiconClassifier::new(),
            StopwordFilter::from_list(&["fresh"]),
        );
        let lists = WordLists::new(["brand"], Vec::<String>::new());

        let kept = filter.select("brand fresh moringa the xyzzplk powder moringa ab", &lists);
        assert_eq!(kept, vec!["moringa", "powder", "moringa"]);
    }

    #[test]
    fn test_select_empty_text() {
        let filter = TokenFilter::new(LexiconClassifier::new(), StopwordFilter::empty());
        assert!(filter.select("", &WordLists::empty()).is_empty());
    }
}
