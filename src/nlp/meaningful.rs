//! Meaningful-word filter
//!
//! A token is worth counting when it is a content word, purely alphabetic,
//! at least three letters long, and does not look like keyboard noise.

use super::classifier::WordClassifier;

/// Runs of this many consonants (or vowels) mark a token as noise.
pub const NOISE_RUN_LENGTH: usize = 4;
/// Tokens longer than this are noise.
pub const MAX_WORD_LENGTH: usize = 15;
/// Tokens must be strictly longer than this.
pub const MIN_WORD_LENGTH_EXCLUSIVE: usize = 2;

// `y` counts as a consonant.
fn is_consonant(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'b'..='z') && !is_vowel(c)
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Length of the longest run of characters satisfying `pred`.
fn longest_run(word: &str, pred: impl Fn(char) -> bool) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in word.chars() {
        if pred(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Whether a token looks like random letters rather than a word.
pub fn looks_random(word: &str) -> bool {
    longest_run(word, is_consonant) >= NOISE_RUN_LENGTH
        || longest_run(word, is_vowel) >= NOISE_RUN_LENGTH
        || word.chars().count() > MAX_WORD_LENGTH
}

/// Filters tokens down to meaningful words using an injected classifier.
#[derive(Debug, Clone, Default)]
pub struct MeaningfulnessFilter<C> {
    classifier: C,
}

impl<C: WordClassifier> MeaningfulnessFilter<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Whether `word` should be counted and ranked.
    pub fn is_meaningful(&self, word: &str) -> bool {
        let alphabetic = !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase());
        if !alphabetic || word.len() <= MIN_WORD_LENGTH_EXCLUSIVE || looks_random(word) {
            return false;
        }
        self.classifier.classify(word).is_content_word()
    }
}
