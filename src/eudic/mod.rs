//! Client for the Eudic study-list open API.
//!
//! [`blocking::BlockingEudicClient`] and [`nonblocking::AsyncEudicClient`] expose the
//! same four operations; pick one per deployment and never share an instance across
//! the two execution models. [`factory::ClientFactory`] builds either from an
//! [`EudicConfig`](crate::config::EudicConfig).

use std::{
    fmt,
    time::Duration,
};

use crate::{
    config::EudicConfig,
    core::VocBuilderError,
};

pub mod api;
pub mod blocking;
pub mod factory;
pub mod nonblocking;
pub mod types;

pub use api::{
    DEFAULT_LANGUAGE,
    EUDIC_BASE,
};
pub use blocking::BlockingEudicClient;
pub use factory::{
    get_client,
    ClientFactory,
    EudicClient,
};
pub use nonblocking::AsyncEudicClient;
pub use types::{
    NoteRecord,
    StudyListWord,
};

/// Everything a client captures at construction.
#[derive(Clone, PartialEq)]
pub struct ClientOptions {
    pub access_key: String,
    pub base_url: String,
    pub language: String,
    pub default_list_id: Option<String>,
    pub timeout: Duration,
}

impl ClientOptions {
    pub fn new(access_key: impl Into<String>) -> Self {
        let defaults = EudicConfig::default();
        let timeout = defaults.timeout();
        Self {
            access_key: access_key.into(),
            base_url: defaults.base_url,
            language: defaults.language,
            default_list_id: None,
            timeout,
        }
    }

    /// `None` when the config lacks a key, or lacks a list id it requires.
    pub fn from_config(config: &EudicConfig) -> Option<Self> {
        if !config.is_configured() {
            return None;
        }
        let access_key = config.access_key()?;
        Some(Self {
            access_key: access_key.to_string(),
            base_url: config.base_url.clone(),
            language: config.language.clone(),
            default_list_id: config.default_list_id().map(str::to_string),
            timeout: config.timeout(),
        })
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn default_list_id(mut self, list_id: impl Into<String>) -> Self {
        self.default_list_id = Some(list_id.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn validate(&self) -> Result<(), VocBuilderError> {
        if self.access_key.trim().is_empty() {
            return Err(VocBuilderError::Custom("Access key must not be empty".to_string()));
        }
        Ok(())
    }

    fn resolve_list_id<'a>(&'a self, list_id: Option<&'a str>) -> Result<&'a str, VocBuilderError> {
        list_id.or(self.default_list_id.as_deref()).ok_or(VocBuilderError::MissingListId)
    }
}

// Never print the access key.
impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("access_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("default_list_id", &self.default_list_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_config() {
        assert!(ClientOptions::from_config(&EudicConfig::default()).is_none());

        let config = EudicConfig {
            access_key: Some(" key ".to_string()),
            default_list_id: Some("7".to_string()),
            language: "de".to_string(),
            ..Default::default()
        };
        let options = ClientOptions::from_config(&config).unwrap();
        assert_eq!(options.access_key, "key");
        assert_eq!(options.default_list_id.as_deref(), Some("7"));
        assert_eq!(options.language, "de");
        assert_eq!(options.base_url, EUDIC_BASE);
    }

    #[test]
    fn test_new_uses_config_defaults() {
        let options = ClientOptions::new("key");
        assert_eq!(options.base_url, EUDIC_BASE);
        assert_eq!(options.language, DEFAULT_LANGUAGE);
        assert_eq!(options.timeout, EudicConfig::default().timeout());
        assert_eq!(options.default_list_id, None);
    }

    #[test]
    fn test_resolve_list_id() {
        let options = ClientOptions::new("key");
        assert!(matches!(options.resolve_list_id(None), Err(VocBuilderError::MissingListId)));
        assert_eq!(options.resolve_list_id(Some("1")).unwrap(), "1");

        let options = options.default_list_id("9");
        assert_eq!(options.resolve_list_id(None).unwrap(), "9");
        assert_eq!(options.resolve_list_id(Some("1")).unwrap(), "1");
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", ClientOptions::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(ClientOptions::new("  ").validate().is_err());
        assert!(ClientOptions::new("key").validate().is_ok());
    }
}
