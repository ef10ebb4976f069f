//! Part-of-speech classification for single words
//!
//! The keyword stages only need to know whether a word can act as a noun,
//! verb, or adjective. [`WordClassifier`] is that capability; the default
//! [`LexiconClassifier`] combines a closed-class lexicon with suffix rules,
//! treating any other word as open vocabulary.

use rustc_hash::{FxHashMap, FxHashSet};

/// Content-word categories a word can belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordClasses {
    pub noun: bool,
    pub verb: bool,
    pub adjective: bool,
}

impl WordClasses {
    pub const NONE: Self = Self {
        noun: false,
        verb: false,
        adjective: false,
    };

    pub const NOUN: Self = Self {
        noun: true,
        verb: false,
        adjective: false,
    };

    pub const VERB: Self = Self {
        noun: false,
        verb: true,
        adjective: false,
    };

    pub const ADJECTIVE: Self = Self {
        noun: false,
        verb: false,
        adjective: true,
    };

    /// True if the word belongs to at least one content category.
    pub fn is_content_word(&self) -> bool {
        self.noun || self.verb || self.adjective
    }
}

/// Classifies a single lowercase word.
pub trait WordClassifier {
    fn classify(&self, word: &str) -> WordClasses;
}

/// Determiners, pronouns, prepositions, conjunctions, adverbs, number words
/// and interjections. None of these is a content word.
const CLOSED_CLASS: &[&str] = &[
    // determiners
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "such", "what", "which", "whose", "whichever", "whatever",
    // pronouns
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "someone", "somebody", "anyone", "anybody", "everyone", "everybody", "nobody", "none",
    "something", "anything", "everything", "nothing",
    // prepositions
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "despite", "down", "during", "except", "for", "from", "in", "inside", "into", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "per", "since", "through", "throughout",
    "till", "to", "toward", "towards", "under", "underneath", "until", "unto", "up", "upon",
    "via", "with", "within", "without",
    // conjunctions
    "and", "or", "but", "nor", "so", "yet", "if", "because", "although", "though", "unless",
    "whereas", "while", "whether", "whenever", "wherever",
    // adverbs
    "very", "too", "also", "just", "often", "never", "always", "here", "there", "now", "then",
    "soon", "again", "almost", "already", "quite", "rather", "perhaps", "maybe", "still",
    "even", "ever", "else", "instead", "together", "away", "not", "how", "why", "when",
    "where", "once", "twice", "thus", "hence", "therefore", "however", "moreover", "indeed",
    "seldom", "sometimes", "somewhat", "anyway", "otherwise", "meanwhile", "nevertheless",
    // number words
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
    "billion", "first", "second", "third",
    // interjections
    "oh", "ah", "wow", "hey", "hello", "oops", "yes", "yeah", "okay", "ok", "hmm", "ugh",
];

/// `-ly` words that are nouns or adjectives rather than adverbs.
const LY_CONTENT_WORDS: &[&str] = &[
    "family", "supply", "reply", "apply", "rely", "ally", "rally", "belly", "bully", "jelly",
    "lily", "fly", "july", "italy", "assembly", "anomaly", "butterfly", "melancholy", "early",
    "daily", "weekly", "monthly", "yearly", "hourly", "friendly", "lovely", "holy", "ugly",
    "silly", "costly", "lonely", "likely", "elderly", "orderly", "deadly", "curly", "oily",
    "chilly", "hilly", "woolly", "wobbly", "bubbly", "comply", "multiply", "imply", "sly",
];

const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify", "ate"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ant", "ent", "ary",
];

/// Lexicon and suffix based classifier.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    closed_class: FxHashSet<&'static str>,
    ly_content: FxHashSet<&'static str>,
    overrides: FxHashMap<String, WordClasses>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconClassifier {
    /// Create a classifier with the built-in lexicon
    pub fn new() -> Self {
        Self {
            closed_class: CLOSED_CLASS.iter().copied().collect(),
            ly_content: LY_CONTENT_WORDS.iter().copied().collect(),
            overrides: FxHashMap::default(),
        }
    }

    /// Pin the classes of a specific word, taking precedence over the lexicon.
    pub fn with_override(mut self, word: &str, classes: WordClasses) -> Self {
        self.overrides.insert(word.to_lowercase(), classes);
        self
    }

    fn is_adverb(&self, word: &str) -> bool {
        word.len() > 4 && word.ends_with("ly") && !self.ly_content.contains(word)
    }

    fn classify_open(word: &str) -> WordClasses {
        // Suffix rules need some stem in front of them.
        let has_suffix = |suffix: &str| word.len() > suffix.len() + 1 && word.ends_with(suffix);

        if VERB_SUFFIXES.iter().any(|&s| has_suffix(s)) {
            return WordClasses {
                // Gerunds double as nouns ("cooking", "packaging").
                noun: word.ends_with("ing"),
                verb: true,
                adjective: false,
            };
        }

        if ADJECTIVE_SUFFIXES.iter().any(|&s| has_suffix(s)) {
            return WordClasses::ADJECTIVE;
        }

        WordClasses::NOUN
    }
}

impl WordClassifier for LexiconClassifier {
    fn classify(&self, word: &str) -> WordClasses {
        if let Some(classes) = self.overrides.get(word) {
            return *classes;
        }
        if word.is_empty() || self.closed_class.contains(word) || self.is_adverb(word) {
            return WordClasses::NONE;
        }
        Self::classify_open(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_words_are_not_content() {
        let classifier = LexiconClassifier::new();
        for word in ["the", "and", "with", "they", "very", "three"] {
            assert!(!classifier.classify(word).is_content_word(), "{word}");
        }
    }

    #[test]
    fn test_adverbs_rejected() {
        let classifier = LexiconClassifier::new();
        assert_eq!(classifier.classify("quickly"), WordClasses::NONE);
        assert_eq!(classifier.classify("naturally"), WordClasses::NONE);
    }

    #[test]
    fn test_ly_content_words_kept() {
        let classifier = LexiconClassifier::new();
        assert!(classifier.classify("family").is_content_word());
        assert!(classifier.classify("daily").is_content_word());
        // Too short to be read as an adverb.
        assert!(classifier.classify("holy").is_content_word());
    }

    #[test]
    fn test_verb_suffixes() {
        let classifier = LexiconClassifier::new();
        let running = classifier.classify("running");
        assert!(running.verb);
        assert!(running.noun);

        let dried = classifier.classify("dried");
        assert!(dried.verb);
        assert!(!dried.noun);
    }

    #[test]
    fn test_adjective_suffixes() {
        let classifier = LexiconClassifier::new();
        assert_eq!(classifier.classify("nutritious"), WordClasses::ADJECTIVE);
        assert_eq!(classifier.classify("organic"), WordClasses::ADJECTIVE);
        assert_eq!(classifier.classify("herbal"), WordClasses::ADJECTIVE);
    }

    #[test]
    fn test_open_vocabulary_defaults_to_noun() {
        let classifier = LexiconClassifier::new();
        assert_eq!(classifier.classify("moringa"), WordClasses::NOUN);
        assert_eq!(classifier.classify("powder"), WordClasses::NOUN);
        // "red" is too short for the "ed" rule to apply.
        assert_eq!(classifier.classify("red"), WordClasses::NOUN);
    }

    #[test]
    fn test_override_wins() {
        let classifier = LexiconClassifier::new()
            .with_override("Moringa", WordClasses::NONE)
            .with_override("the", WordClasses::NOUN);
        assert_eq!(classifier.classify("moringa"), WordClasses::NONE);
        assert_eq!(classifier.classify("the"), WordClasses::NOUN);
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(LexiconClassifier::new().classify(""), WordClasses::NONE);
    }
}
