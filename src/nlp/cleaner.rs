//! Text cleaning
//!
//! Turns a raw record into a run of lowercase ASCII words separated by single
//! spaces. Bracketed asides (`[...]`, `(...)`, `{...}`) are dropped unless
//! they mention a priority word, in which case only those words survive.

/// Returns the closing delimiter for a bracket opener.
fn closer_for(c: char) -> Option<char> {
    match c {
        '[' => Some(']'),
        '(' => Some(')'),
        '{' => Some('}'),
        _ => None,
    }
}

/// An aside never spans a line break.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_kept_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_whitespace()
}

/// Find the byte offset of `closer` after `start`, stopping at a line break.
fn find_closer(text: &str, start: usize, closer: char) -> Option<usize> {
    for (offset, c) in text[start..].char_indices() {
        if c == closer {
            return Some(start + offset);
        }
        if is_line_terminator(c) {
            return None;
        }
    }
    None
}

/// Words inside an aside that match a priority word, lowercased.
fn preserved_words(inner: &str, priority_words: &[String]) -> Vec<String> {
    inner
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| {
            priority_words
                .iter()
                .any(|pw| pw.to_lowercase() == *word)
        })
        .collect()
}

/// Replace every bracketed aside with the priority words it contains.
///
/// The first closer of the same kind ends an aside; nesting is not tracked.
/// An opener with no closer on its line is left in place.
pub fn strip_asides(text: &str, priority_words: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        let next = pos + c.len_utf8();

        if let Some(close_at) = closer_for(c).and_then(|closer| find_closer(text, next, closer)) {
            let kept = preserved_words(&text[next..close_at], priority_words);
            out.push_str(&kept.join(" "));
            // Delimiters are all single-byte.
            pos = close_at + 1;
            continue;
        }

        out.push(c);
        pos = next;
    }

    out
}

/// Clean a raw record for tokenization.
///
/// Output contains only `a`-`z` and single spaces, without leading or
/// trailing whitespace.
pub fn clean_text(text: &str, priority_words: &[String]) -> String {
    let lowered = strip_asides(text, priority_words).to_lowercase();

    let scrubbed: String = lowered
        .chars()
        .map(|c| if is_kept_char(c) { c } else { ' ' })
        .collect();

    scrubbed.split_whitespace().collect::<Vec<_>>().join(" ")
}
