//! Request shapes and response decoding shared by both client flavours.
//!
//! The blocking and async clients only differ in how they send an [`Endpoint`];
//! everything that defines the study-list contract lives here.

use reqwest::{
    Method,
    StatusCode,
};
use serde_json::Value;

use super::types::{
    DataEnvelope,
    NoteRecord,
    StudyListWord,
};
use crate::core::{
    http::ensure_success,
    VocBuilderError,
};

pub const EUDIC_BASE: &str = "https://api.frdic.com";
pub const DEFAULT_LANGUAGE: &str = "en";

const NOTE_PATH: &str = "/api/open/v1/studylist/note";
const WORDS_PATH: &str = "/api/open/v1/studylist/words";

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl Endpoint {
    pub fn word_note(word: &str, language: &str) -> Self {
        Self {
            method: Method::GET,
            path: NOTE_PATH.to_string(),
            query: vec![("language", language.to_string()), ("word", word.to_string())],
            body: None,
        }
    }

    pub fn study_list_words(list_id: &str, language: &str) -> Self {
        Self {
            method: Method::GET,
            path: format!("{}/{}", WORDS_PATH, list_id),
            query: vec![("language", language.to_string())],
            body: None,
        }
    }

    pub fn add_words(list_id: &str, words: &[String], language: &str) -> Self {
        Self {
            method: Method::POST,
            path: WORDS_PATH.to_string(),
            query: vec![("language", language.to_string())],
            body: Some(serde_json::json!({
                "id": list_id,
                "language": language,
                "words": words,
            })),
        }
    }

    pub fn add_note(word: &str, note: &str, language: &str) -> Self {
        Self {
            method: Method::POST,
            path: NOTE_PATH.to_string(),
            query: vec![("language", language.to_string()), ("word", word.to_string())],
            body: Some(serde_json::json!({
                "word": word,
                "language": language,
                "note": note,
            })),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Decodes a note-style response. An empty success body yields an empty record.
pub fn decode_record(status: StatusCode, body: String) -> Result<NoteRecord, VocBuilderError> {
    let body = ensure_success(status, body)?;
    if body.trim().is_empty() {
        return Ok(NoteRecord::new());
    }
    Ok(serde_json::from_str(&body)?)
}

/// Decodes the list-words envelope, keeping only its `data` array.
pub fn decode_words(
    endpoint: &Endpoint,
    status: StatusCode,
    body: String,
) -> Result<Vec<StudyListWord>, VocBuilderError> {
    let body = ensure_success(status, body)?;
    let envelope: DataEnvelope<Vec<StudyListWord>> = serde_json::from_str(&body)?;
    envelope.data.ok_or_else(|| VocBuilderError::MissingData(endpoint.path.clone()))
}
