use tracing::debug;

use super::{
    AsyncEudicClient,
    BlockingEudicClient,
    ClientOptions,
};
use crate::{
    config::{
        EudicConfig,
        TransportMode,
    },
    core::VocBuilderError,
};

/// A ready client of whichever flavour the config asked for.
#[derive(Debug, Clone)]
pub enum EudicClient {
    Blocking(BlockingEudicClient),
    Async(AsyncEudicClient),
}

impl EudicClient {
    pub fn mode(&self) -> TransportMode {
        match self {
            EudicClient::Blocking(_) => TransportMode::Blocking,
            EudicClient::Async(_) => TransportMode::Async,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        match self {
            EudicClient::Blocking(client) => client.options(),
            EudicClient::Async(client) => client.options(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.options().access_key
    }

    pub fn into_blocking(self) -> Option<BlockingEudicClient> {
        match self {
            EudicClient::Blocking(client) => Some(client),
            EudicClient::Async(_) => None,
        }
    }

    pub fn into_async(self) -> Option<AsyncEudicClient> {
        match self {
            EudicClient::Async(client) => Some(client),
            EudicClient::Blocking(_) => None,
        }
    }
}

/// Builds a client for `config`, or `None` when it is unconfigured.
///
/// Never touches the network; an error means the HTTP client itself could not
/// be set up.
///
/// `config.mode` defaults to [`TransportMode::Blocking`]. A blocking client
/// panics when built or dropped inside an async runtime, so async callers must
/// set [`TransportMode::Async`] or use [`ClientFactory::get_async_client`].
pub fn get_client(config: &EudicConfig) -> Result<Option<EudicClient>, VocBuilderError> {
    let Some(options) = ClientOptions::from_config(config) else {
        debug!("Vocabulary service not configured");
        return Ok(None);
    };

    let client = match config.mode {
        TransportMode::Blocking => EudicClient::Blocking(BlockingEudicClient::with_options(options)?),
        TransportMode::Async => EudicClient::Async(AsyncEudicClient::with_options(options)?),
    };
    Ok(Some(client))
}

/// Owns the configuration clients are built from.
///
/// Changing the access key only affects clients built afterwards.
#[derive(Debug, Clone, Default)]
pub struct ClientFactory {
    config: EudicConfig,
}

impl ClientFactory {
    pub fn new(config: EudicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EudicConfig {
        &self.config
    }

    pub fn set_access_key(&mut self, key: impl Into<String>) {
        self.config.access_key = Some(key.into());
    }

    pub fn set_default_list_id(&mut self, list_id: impl Into<String>) {
        self.config.default_list_id = Some(list_id.into());
    }

    pub fn set_mode(&mut self, mode: TransportMode) {
        self.config.mode = mode;
    }

    /// See [`get_client`]; async callers need `TransportMode::Async` here.
    pub fn get_client(&self) -> Result<Option<EudicClient>, VocBuilderError> {
        get_client(&self.config)
    }

    pub fn get_blocking_client(&self) -> Result<Option<BlockingEudicClient>, VocBuilderError> {
        ClientOptions::from_config(&self.config).map(BlockingEudicClient::with_options).transpose()
    }

    pub fn get_async_client(&self) -> Result<Option<AsyncEudicClient>, VocBuilderError> {
        ClientOptions::from_config(&self.config).map(AsyncEudicClient::with_options).transpose()
    }
}
