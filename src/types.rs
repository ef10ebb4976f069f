//! Core types shared across the labeling stages

use rustc_hash::FxHashSet;
use tracing::warn;

/// Ignored and priority words for one run.
///
/// Loaded once and passed explicitly to the stages that need them.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    /// Words excluded from counting and extraction (lowercase)
    ignored: FxHashSet<String>,
    /// Words kept through bracket stripping and ranked first, in declared order
    priority: Vec<String>,
    /// Lowercased `priority`, deduplicated, same order
    priority_lower: Vec<String>,
}

impl WordLists {
    pub fn new<I, P>(ignored: I, priority: P) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let ignored = ignored
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let priority: Vec<String> = priority.into_iter().map(Into::into).collect();

        let mut priority_lower: Vec<String> = Vec::with_capacity(priority.len());
        for word in &priority {
            let lower = word.to_lowercase();
            if priority_lower.contains(&lower) {
                warn!("Duplicate priority word ignored: {}", word);
                continue;
            }
            priority_lower.push(lower);
        }

        Self {
            ignored,
            priority,
            priority_lower,
        }
    }

    /// Lists with no ignored and no priority words
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored.contains(word)
    }

    /// Priority words as declared
    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Lowercased, deduplicated priority words in declared order
    pub fn priority_lowercase(&self) -> &[String] {
        &self.priority_lower
    }

    pub fn is_priority(&self, word: &str) -> bool {
        self.priority_lower.iter().any(|p| p == word)
    }

    pub fn num_ignored(&self) -> usize {
        self.ignored.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_words_normalized() {
        let lists = WordLists::new(["  Brand ", "ACME", ""], Vec::<String>::new());
        assert!(lists.is_ignored("brand"));
        assert!(lists.is_ignored("acme"));
        assert!(!lists.is_ignored(""));
        assert_eq!(lists.num_ignored(), 2);
    }

    #[test]
    fn test_priority_order_and_case() {
        let lists = WordLists::new(Vec::<String>::new(), ["Organic", "leaf", "ORGANIC"]);
        assert_eq!(lists.priority(), ["Organic", "leaf", "ORGANIC"]);
        assert_eq!(lists.priority_lowercase(), ["organic", "leaf"]);
        assert!(lists.is_priority("organic"));
        assert!(!lists.is_priority("Organic"));
    }
}
