//! Stopword filtering
//!
//! Stop-word removal is a capability injected into the keyword stages through
//! the [`Stopwords`] trait. [`StopwordFilter`] is the default implementation,
//! backed by the `stop-words` crate with support for custom lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Decides whether a token is a stopword.
pub trait Stopwords {
    fn is_stopword(&self, word: &str) -> bool;

    /// Drop stopwords from a token list, keeping order.
    fn remove_stopwords<'a>(&self, words: Vec<&'a str>) -> Vec<&'a str> {
        words.into_iter().filter(|w| !self.is_stopword(w)).collect()
    }
}

/// A set-backed stopword filter
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Languages accepted by [`StopwordFilter::new`].
    pub const SUPPORTED_LANGUAGES: &'static [&'static str] = &["en", "english"];

    /// Create a stopword filter for the given language, or `None` if the
    /// language has no bundled list.
    pub fn new(language: &str) -> Option<Self> {
        let lang = Self::parse_language(language)?;
        Some(Self {
            stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Filter using the bundled NLTK English list
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Whether `language` names a bundled list.
    pub fn is_supported(language: &str) -> bool {
        Self::parse_language(language).is_some()
    }

    fn parse_language(language: &str) -> Option<LANGUAGE> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Some(LANGUAGE::English),
            _ => None,
        }
    }
}

impl Stopwords for StopwordFilter {
    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}
