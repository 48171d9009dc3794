//! Command execution context
//!
//! Provides a unified context for command execution: config loading,
//! credential storage, client initialization and the sign-in guard.

use std::path::{Path, PathBuf};

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::MedTrackClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::session::CredentialStore;

/// Shared state for a single command run
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Where the configuration was loaded from
    pub config_path: PathBuf,
    /// API client bound to the stored credential
    pub client: MedTrackClient,
    /// Output format: flag, then config preference, then table
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build a context for a command representing app path `location`.
    ///
    /// Does not require a stored credential; use [`authenticated`] for
    /// commands that do.
    ///
    /// [`authenticated`]: CommandContext::authenticated
    pub fn new(opts: &GlobalOptions, location: &str) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let credentials = CredentialStore::from_dirs(config_dir(&config_path));
        Self::with_credentials(opts, location, config_path, credentials)
    }

    /// Build a context from an already resolved config path and an explicit
    /// credential store
    pub fn with_credentials(
        opts: &GlobalOptions,
        location: &str,
        config_path: PathBuf,
        credentials: CredentialStore,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let base_url = config.api_url(opts.api_url_ref());
        let client = MedTrackClient::new(&base_url, credentials, opts.events.clone())?;
        client.set_location(location);

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_config)
            })
            .unwrap_or_default();

        debug!("Context for {} against {}", location, base_url);

        Ok(Self {
            config,
            config_path,
            client,
            format,
        })
    }

    /// Build a context for a command that needs a signed-in user.
    ///
    /// Fails before any request is made when no credential is stored.
    pub fn authenticated(opts: &GlobalOptions, location: &str) -> Result<Self> {
        Self::new(opts, location)?.require_credential()
    }

    fn require_credential(self) -> Result<Self> {
        if !self.client.credentials().is_authenticated() {
            debug!("No stored credential; refusing {}", self.client.location());
            return Err(ConfigError::NotSignedIn.into());
        }
        Ok(self)
    }

    /// Persist the loaded configuration back to where it came from
    pub fn save_config(&self) -> Result<()> {
        self.config.save_to(&self.config_path)
    }
}

/// Directory holding the config file; durable credentials live beside it
pub fn config_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
