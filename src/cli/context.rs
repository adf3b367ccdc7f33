//! Command execution context
//!
//! Loads configuration, applies the command-line overrides, checks that a
//! machine token is available and builds the API client, so handlers start
//! from an authorized client and a resolved output format.

use std::time::Duration;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::PlatformClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// API client carrying the machine token
    pub client: PlatformClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is tolerated when a token was supplied on the
    /// command line or via `SITESECRETS_TOKEN`.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, no token is available, or
    /// the configured preferences are invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::load_config(opts)?;
        config.validate_auth()?;

        let format = resolve_format(opts.format, &config)?;
        let timeout = resolve_timeout(&config)?;
        let token = config.token.clone().ok_or(ConfigError::MissingToken)?;

        let client = PlatformClient::with_host(token, config.api_host.as_deref(), timeout)?;
        debug!("Using API host {}", client.base_url());

        Ok(Self { client, format })
    }

    /// Load the config file and layer the CLI/env overrides on top.
    fn load_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) if opts.token.is_some() => {
                debug!("No config file, using token from command line");
                Config::default()
            }
            Err(e) => return Err(e),
        };

        if let Some(token) = opts.token_ref() {
            config.token = Some(token.to_string());
        }
        if let Some(host) = opts.api_host_ref() {
            config.api_host = Some(host.to_string());
        }

        Ok(config)
    }
}

/// Pick the output format: flag/env first, then the config preference.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }

    match config.preferences.format.as_deref() {
        None => Ok(OutputFormat::default()),
        Some(name) => OutputFormat::from_name(name).ok_or_else(|| {
            ConfigError::Invalid(format!("Unknown output format '{}' in preferences", name)).into()
        }),
    }
}

fn resolve_timeout(config: &Config) -> Result<Duration> {
    match config.preferences.timeout_secs {
        0 => Err(ConfigError::Invalid("timeout_secs must be greater than zero".to_string()).into()),
        secs => Ok(Duration::from_secs(secs)),
    }
}
