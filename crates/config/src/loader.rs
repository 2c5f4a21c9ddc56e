//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Load an optional `.env` file (skipped when `DOTENV_DISABLED` is set).
//! - Read and parse `PETFRIENDS_*` environment variables.
//! - Validate the base URL and timeout, apply defaults for everything
//!   optional, and build the final [`Config`].
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - The valid account (`PETFRIENDS_EMAIL` / `PETFRIENDS_PASSWORD`) is
//!   required; everything else has a default.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::constants::{
    DEFAULT_INVALID_AUTH_KEY, DEFAULT_INVALID_EMAIL, DEFAULT_INVALID_PASSWORD,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::error::ConfigError;
use crate::types::{Config, ConnectionConfig, Credentials, TestAccounts};

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. The returned value is trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Loader that assembles a [`Config`] from the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    skip_dotenv: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read a `.env` file even if one is present.
    pub fn skip_dotenv(mut self, skip: bool) -> Self {
        self.skip_dotenv = skip;
        self
    }

    /// Load the `.env` file from the current directory or any parent.
    ///
    /// A missing file is not an error; a malformed one is, though the
    /// error never carries file contents.
    fn load_dotenv(&self) -> Result<(), ConfigError> {
        if self.skip_dotenv || env_var_or_none("DOTENV_DISABLED").is_some() {
            return Ok(());
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(())
            }
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(dotenvy::Error::Io(e)) => Err(ConfigError::DotenvIo { kind: e.kind() }),
            Err(dotenvy::Error::LineParse(_, error_index)) => {
                Err(ConfigError::DotenvParse { error_index })
            }
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn required(key: &str) -> Result<String, ConfigError> {
        env_var_or_none(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    fn parse_timeout() -> Result<Duration, ConfigError> {
        let secs = match env_var_or_none("PETFRIENDS_TIMEOUT") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: "PETFRIENDS_TIMEOUT".to_string(),
                message: "must be a number of seconds".to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!("must be between 1 and {} seconds (got {})", MAX_TIMEOUT_SECS, secs),
            });
        }
        Ok(Duration::from_secs(secs))
    }

    fn parse_base_url() -> Result<String, ConfigError> {
        let raw = env_var_or_none("PETFRIENDS_BASE_URL")
            .unwrap_or_else(|| crate::constants::DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
            message: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(raw)
    }

    /// Build the final configuration.
    pub fn load(self) -> Result<Config, ConfigError> {
        self.load_dotenv()?;

        let base_url = Self::parse_base_url()?;
        let timeout = Self::parse_timeout()?;

        let valid = Credentials::new(
            Self::required("PETFRIENDS_EMAIL")?,
            Self::required("PETFRIENDS_PASSWORD")?,
        );
        let invalid = Credentials::new(
            env_var_or_none("PETFRIENDS_INVALID_EMAIL")
                .unwrap_or_else(|| DEFAULT_INVALID_EMAIL.to_string()),
            env_var_or_none("PETFRIENDS_INVALID_PASSWORD")
                .unwrap_or_else(|| DEFAULT_INVALID_PASSWORD.to_string()),
        );
        let invalid_auth_key = env_var_or_none("PETFRIENDS_INVALID_AUTH_KEY")
            .unwrap_or_else(|| DEFAULT_INVALID_AUTH_KEY.to_string());

        debug!(base_url = %base_url, account = %valid.email, "Loaded suite configuration");

        Ok(Config {
            connection: ConnectionConfig { base_url, timeout },
            accounts: TestAccounts { valid, invalid },
            invalid_auth_key,
        })
    }
}
