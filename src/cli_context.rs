use std::path::PathBuf;
use std::sync::Arc;

use crate::client::GeminiClient;
use crate::config::{get_api_key, load_config, save_config, Config};
use crate::error::{HubError, HubResult};
use crate::session::Session;
use crate::state::AppState;
use crate::store::FileBackend;

/// Central context for CLI operations, managing configuration, the data
/// directory and the definition client
pub struct CliContext {
    config: Config,
    api_key: Option<String>,
    data_dir: PathBuf,
    client: Option<Arc<GeminiClient>>,
}

impl CliContext {
    /// Load context from saved configuration
    pub fn load() -> HubResult<Self> {
        let config = load_config();
        let data_dir = config.data_dir();
        let api_key = get_api_key().ok();

        Ok(Self {
            config,
            api_key,
            data_dir,
            client: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Open the persisted application state
    pub fn open_state(&self) -> HubResult<AppState<FileBackend>> {
        AppState::open(&self.data_dir)
    }

    /// Open the state and resolve who is logged in
    pub fn open_session(&self) -> HubResult<(AppState<FileBackend>, Session)> {
        let mut state = self.open_state()?;
        let session = Session::resolve(&mut state);
        Ok((state, session))
    }

    /// Get or create the definition client (requires API key)
    pub fn verified_client(&mut self) -> HubResult<Arc<GeminiClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_key = self.api_key()?.clone();
        let client = Arc::new(
            GeminiClient::new(&api_key)?
                .with_model(self.config.model())
                .with_language(self.config.definition_language()),
        );
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get the API key, loading from config if necessary
    pub fn api_key(&mut self) -> HubResult<&String> {
        if self.api_key.is_none() {
            self.api_key = Some(get_api_key()?);
        }

        self.api_key.as_ref().ok_or(HubError::ApiKeyNotFound)
    }

    /// Set and save a new API key
    pub fn set_api_key(&mut self, api_key: String) -> HubResult<()> {
        let mut config = load_config();
        config.api_key = Some(api_key.clone());
        save_config(&config)?;
        self.config = config;
        self.api_key = Some(api_key);
        self.client = None;
        Ok(())
    }

    /// Check if context has a usable API key
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some() || get_api_key().is_ok()
    }
}

/// Builder for contexts with explicit settings instead of the saved ones
pub struct CliContextBuilder {
    api_key: Option<String>,
    data_dir: Option<PathBuf>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            data_dir: None,
        }
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    pub fn build(self) -> HubResult<CliContext> {
        let mut context = CliContext::load()?;
        if let Some(api_key) = self.api_key {
            context.api_key = Some(api_key);
            context.client = None;
        }
        if let Some(data_dir) = self.data_dir {
            context.data_dir = data_dir;
        }
        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
