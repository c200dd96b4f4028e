use reqwest::{
    Client,
    StatusCode,
};
use tracing::{
    debug,
    warn,
};

use super::{
    api::{
        decode_record,
        decode_words,
        Endpoint,
    },
    types::{
        NoteRecord,
        StudyListWord,
    },
    ClientOptions,
};
use crate::core::{
    http::async_client,
    VocBuilderError,
};

/// Study-list client that suspends only while waiting on the network.
#[derive(Debug, Clone)]
pub struct AsyncEudicClient {
    http: Client,
    options: ClientOptions,
}

impl AsyncEudicClient {
    pub fn new(access_key: impl Into<String>) -> Result<Self, VocBuilderError> {
        Self::with_options(ClientOptions::new(access_key))
    }

    pub fn with_options(options: ClientOptions) -> Result<Self, VocBuilderError> {
        options.validate()?;
        let http = async_client(&options.access_key, options.timeout)?;
        Ok(Self { http, options })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn access_key(&self) -> &str {
        &self.options.access_key
    }

    pub fn language(&self) -> &str {
        &self.options.language
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.options.language = language.into();
        self
    }

    pub async fn get_word_note(&self, word: &str) -> Result<NoteRecord, VocBuilderError> {
        let (status, body) = self.send(&Endpoint::word_note(word, self.language())).await?;
        decode_record(status, body)
    }

    pub async fn get_study_list_words(
        &self,
        list_id: &str,
    ) -> Result<Vec<StudyListWord>, VocBuilderError> {
        let endpoint = Endpoint::study_list_words(list_id, self.language());
        let (status, body) = self.send(&endpoint).await?;
        decode_words(&endpoint, status, body)
    }

    pub async fn add_words_to_study_list(
        &self,
        words: &[String],
        list_id: &str,
    ) -> Result<NoteRecord, VocBuilderError> {
        let endpoint = Endpoint::add_words(list_id, words, self.language());
        let (status, body) = self.send(&endpoint).await?;
        decode_record(status, body)
    }

    pub async fn add_words_to_default_list(
        &self,
        words: &[String],
    ) -> Result<NoteRecord, VocBuilderError> {
        let list_id = self.options.resolve_list_id(None)?;
        self.add_words_to_study_list(words, list_id).await
    }

    pub async fn add_word_note(&self, word: &str, note: &str) -> Result<NoteRecord, VocBuilderError> {
        let (status, body) = self.send(&Endpoint::add_note(word, note, self.language())).await?;
        decode_record(status, body)
    }

    async fn send(&self, endpoint: &Endpoint) -> Result<(StatusCode, String), VocBuilderError> {
        debug!(method = %endpoint.method, path = %endpoint.path, "Sending study-list request");

        let mut request = self
            .http
            .request(endpoint.method.clone(), endpoint.url(&self.options.base_url))
            .query(&endpoint.query);
        if let Some(body) = &endpoint.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), path = %endpoint.path, body = %body, "Study-list request failed");
        }
        Ok((status, body))
    }
}
