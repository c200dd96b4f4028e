use std::{
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::VocBuilderError,
    eudic::api::{
        DEFAULT_LANGUAGE,
        EUDIC_BASE,
    },
    persistence::{
        get_data_file_path,
        load_json_or_default,
        save_json_to,
    },
};

pub const CONFIG_FILE_NAME: &str = "eudic.json";

pub const ENV_ACCESS_KEY: &str = "EUDIC_ACCESS_KEY";
pub const ENV_STUDYLIST_ID: &str = "EUDIC_STUDYLIST_ID";
pub const ENV_BASE_URL: &str = "EUDIC_BASE_URL";
pub const ENV_LANGUAGE: &str = "EUDIC_LANGUAGE";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which client flavour the factory hands out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Blocking,
    Async,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EudicConfig {
    pub access_key: Option<String>,
    pub default_list_id: Option<String>,
    /// Treat a missing default list id as "unconfigured".
    pub require_list_id: bool,
    pub base_url: String,
    pub language: String,
    pub mode: TransportMode,
    pub timeout_secs: u64,
}

impl Default for EudicConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            default_list_id: None,
            require_list_id: false,
            base_url: EUDIC_BASE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            mode: TransportMode::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EudicConfig {
    pub fn default_path() -> PathBuf {
        get_data_file_path(CONFIG_FILE_NAME)
    }

    /// Settings file from the app data dir, then environment overrides.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path()).with_env()
    }

    /// Unreadable or missing files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), VocBuilderError> {
        save_json_to(self, path)
    }

    pub fn with_env(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(ENV_ACCESS_KEY) {
            self.access_key = Some(key);
        }
        if let Some(list_id) = lookup(ENV_STUDYLIST_ID) {
            self.default_list_id = Some(list_id);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(language) = lookup(ENV_LANGUAGE) {
            self.language = language;
        }
        self
    }

    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn default_list_id(&self) -> Option<&str> {
        self.default_list_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// Whether the factory would hand out a client for this config.
    pub fn is_configured(&self) -> bool {
        self.access_key().is_some() && (!self.require_list_id || self.default_list_id().is_some())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = EudicConfig::default();
        assert_eq!(config.base_url, "https://api.frdic.com");
        assert_eq!(config.language, "en");
        assert_eq!(config.mode, TransportMode::Blocking);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = EudicConfig {
            access_key: Some("   ".to_string()),
            default_list_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.access_key(), None);
        assert_eq!(config.default_list_id(), None);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_require_list_id() {
        let mut config = EudicConfig {
            access_key: Some("key".to_string()),
            require_list_id: true,
            ..Default::default()
        };
        assert!(!config.is_configured());
        config.default_list_id = Some("0".to_string());
        assert!(config.is_configured());
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            (ENV_ACCESS_KEY, "NIS abc"),
            (ENV_STUDYLIST_ID, "  "),
            (ENV_LANGUAGE, "fr"),
        ]);
        let config = EudicConfig { default_list_id: Some("42".to_string()), ..Default::default() }
            .with_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.access_key(), Some("NIS abc"));
        assert_eq!(config.default_list_id(), Some("42"));
        assert_eq!(config.language, "fr");
        assert_eq!(config.base_url, EUDIC_BASE);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert_eq!(EudicConfig::load_from(&path), EudicConfig::default());

        let config = EudicConfig {
            access_key: Some("key".to_string()),
            mode: TransportMode::Async,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(EudicConfig::load_from(&path), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "access_key": "key", "mode": "async" }"#).unwrap();

        let config = EudicConfig::load_from(&path);
        assert_eq!(config.access_key(), Some("key"));
        assert_eq!(config.mode, TransportMode::Async);
        assert_eq!(config.language, DEFAULT_LANGUAGE);
    }
}
