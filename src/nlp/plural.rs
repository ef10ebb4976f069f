//! Singular/plural merging within a record
//!
//! When a record mentions both "leaf" and "leaves", the singular is folded
//! into the plural so the pair counts as one keyword.

use rustc_hash::{FxHashMap, FxHashSet};

/// Suffix rewrites, checked in order; the first match wins.
const PLURAL_RULES: &[(&str, &str)] = &[
    ("y", "ies"),
    ("s", "s"),
    ("ch", "ches"),
    ("sh", "shes"),
    ("o", "oes"),
    ("f", "ves"),
    ("fe", "ves"),
];

/// Heuristic plural of `word`. Words ending in `s` are their own plural.
pub fn plural_form(word: &str) -> String {
    if word.ends_with('s') {
        return word.to_string();
    }

    for (suffix, replacement) in PLURAL_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }

    format!("{word}s")
}

/// `word` without a trailing `s`.
pub fn singular_candidate(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

/// Rewrite each word to its plural when the record also contains that plural.
///
/// The output has the same length and order as the input.
pub fn normalize_plurals<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let word_set: FxHashSet<&str> = words.iter().map(AsRef::as_ref).collect();

    let mut plural_map: FxHashMap<&str, String> = FxHashMap::default();
    for &word in &word_set {
        let plural = plural_form(word);
        let singular = singular_candidate(word);

        if plural != word && word_set.contains(singular) && word_set.contains(plural.as_str()) {
            plural_map.insert(word, plural);
        }
    }

    words
        .iter()
        .map(|w| {
            let w = w.as_ref();
            plural_map.get(w).cloned().unwrap_or_else(|| w.to_string())
        })
        .collect()
}
