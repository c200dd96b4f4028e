pub mod candidates;
pub mod stopwords;
pub mod tokenizer;

pub use candidates::{ extract_candidates, CandidateExtractor };
pub use tokenizer::{ normalize, tokenize, words, WordSpan };
