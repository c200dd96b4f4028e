use std::{
    collections::HashSet,
    sync::LazyLock,
};

use super::{
    stopwords::default_stopwords,
    tokenizer::{
        normalize,
        tokenize,
        words,
        WordSpan,
    },
};

pub const MIN_WORD_LEN: usize = 2;

static DEFAULT_EXTRACTOR: LazyLock<CandidateExtractor> = LazyLock::new(CandidateExtractor::new);

/// Picks the words of a text worth sending to a study list.
///
/// A word qualifies when it is capitalized somewhere other than the start of a
/// sentence, or when it is not a stopword. Capitalization wins over the stopword
/// list, so "The" in "read The Times" qualifies while a sentence-initial "The"
/// does not. Words shorter than [`MIN_WORD_LEN`] or made only of numerals never
/// qualify.
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    stopwords: HashSet<String>,
}

impl Default for CandidateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor {
    pub fn new() -> Self {
        Self { stopwords: default_stopwords() }
    }

    /// Built-in stopwords plus `extra`, e.g. a user ignore list.
    pub fn with_extra_stopwords<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extractor = Self::new();
        extractor.stopwords.extend(extra.into_iter().map(|s| normalize(s.as_ref().trim())));
        extractor
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&normalize(word))
    }

    /// Candidates in order of first qualifying occurrence, case preserved,
    /// deduplicated ignoring case.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let mut seen = HashSet::with_capacity(tokens.len());
        let mut candidates = Vec::new();

        for span in words(text) {
            let key = span.key();
            if seen.contains(&key) || !self.qualifies(&span, &key) {
                continue;
            }
            debug_assert!(tokens.contains(&key));
            candidates.push(span.text.to_string());
            seen.insert(key);
        }

        candidates
    }

    fn qualifies(&self, span: &WordSpan<'_>, key: &str) -> bool {
        if span.text.chars().count() < MIN_WORD_LEN {
            return false;
        }
        if span.text.chars().all(char::is_numeric) {
            return false;
        }
        if span.is_capitalized() && !span.sentence_start {
            return true;
        }
        !self.stopwords.contains(key)
    }
}

/// [`CandidateExtractor::extract`] with the built-in stopword list.
pub fn extract_candidates(text: &str) -> Vec<String> {
    DEFAULT_EXTRACTOR.extract(text)
}
