use std::collections::HashSet;

/// English function words that never count as candidates on their own.
///
/// Includes the fragments left behind when contractions are split on the
/// apostrophe ("don't" -> "don", "t").
pub const DEFAULT_STOPWORDS: &[&str] = &[
    // articles & determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "few", "more",
    "most", "other", "such", "no", "nor", "all", "both", "own", "same",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom",
    // auxiliaries
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must",
    // prepositions
    "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "of",
    // conjunctions & adverbs
    "and", "but", "if", "or", "because", "as", "until", "while", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "not", "only", "so", "than", "too",
    "very", "just", "now",
    // contraction fragments
    "s", "t", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn",
    "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
    "weren", "won", "wouldn", "don",
];

pub fn default_stopwords() -> HashSet<String> {
    DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect()
}
