use std::{
    collections::HashSet,
    sync::LazyLock,
};

use regex::Regex;

// A word is a maximal run of alphabetic characters; everything else is a boundary.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Alphabetic}+").unwrap());

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A word as it appears in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// First word of the text, or first word after a `.`, `!` or `?`.
    pub sentence_start: bool,
}

impl WordSpan<'_> {
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    pub fn key(&self) -> String {
        normalize(self.text)
    }
}

pub fn words(text: &str) -> Vec<WordSpan<'_>> {
    let mut spans = Vec::new();
    let mut prev_end: Option<usize> = None;

    for m in WORD_RE.find_iter(text) {
        let sentence_start = match prev_end {
            None => true,
            Some(end) => text[end..m.start()].contains(SENTENCE_TERMINATORS),
        };
        spans.push(WordSpan { text: m.as_str(), start: m.start(), end: m.end(), sentence_start });
        prev_end = Some(m.end());
    }

    spans
}

/// Lower-cased form of a word, used as token and dedup key.
///
/// Lower-casing can emit combining marks ("İ" -> "i\u{307}"); those are dropped.
pub fn normalize(word: &str) -> String {
    word.to_lowercase().chars().filter(|c| c.is_alphabetic()).collect()
}

/// Unique lower-cased words of `text`, in no particular order.
pub fn tokenize(text: &str) -> HashSet<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| normalize(m.as_str()))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_text() {
        let s = "Welcome! This is the official documentation for Python 3.11.2.";
        let expected: HashSet<String> =
            ["documentation", "the", "is", "welcome", "this", "python", "official", "for"]
                .iter()
                .map(|s| s.to_string())
                .collect();
        assert_eq!(tokenize(s), expected);
    }

    #[test]
    fn test_tokenize_degenerate_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  3.14 -- 42!? ").is_empty());
    }

    #[test]
    fn test_tokenize_is_lowercase_and_unique() {
        let tokens = tokenize("Rust rust RUST, don't-stop; Ünïcode ünïcode");
        assert_eq!(tokens.len(), 5); // rust, don, t, stop, ünïcode
        assert!(tokens.contains("ünïcode"));
        for token in &tokens {
            assert!(token.chars().all(char::is_alphabetic));
            assert_eq!(token, &token.to_lowercase());
        }
    }

    #[test]
    fn test_tokenize_drops_combining_marks() {
        let tokens = tokenize("İstanbul is in TÜRKİYE");
        assert!(tokens.contains("istanbul"));
        assert!(tokens.contains("türkiye"));
        for token in &tokens {
            assert!(token.chars().all(char::is_alphabetic), "{token:?}");
        }

        let spans = words("İstanbul");
        assert_eq!(spans[0].key(), "istanbul");
        assert!(tokens.contains(&spans[0].key()));
    }

    #[test]
    fn test_word_spans_track_sentences() {
        let text = "Hello there. General Kenobi! You are... a bold one?no";
        let spans = words(text);
        let starts: Vec<(&str, bool)> = spans.iter().map(|s| (s.text, s.sentence_start)).collect();
        assert_eq!(
            starts,
            vec![
                ("Hello", true),
                ("there", false),
                ("General", true),
                ("Kenobi", false),
                ("You", true),
                ("are", false),
                ("a", true),
                ("bold", false),
                ("one", false),
                ("no", true),
            ]
        );
        assert_eq!(&text[spans[2].start..spans[2].end], "General");
    }

    #[test]
    fn test_span_helpers() {
        let spans = words("Éclair");
        assert!(spans[0].is_capitalized());
        assert_eq!(spans[0].key(), "éclair");
    }
}
