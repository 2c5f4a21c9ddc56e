//! Client builder for constructing [`PetFriendsClient`] instances.
//!
//! Responsibilities:
//! - Fluent configuration (base URL, request timeout)
//! - Validating the required base URL and normalizing trailing slashes
//! - Building the underlying `reqwest::Client` once per instance
//!
//! # Invariants
//! - `base_url` is required; `build()` fails without it
//! - The base URL never carries a trailing slash after normalization

use std::time::Duration;

use petfriends_config::Config;
use petfriends_config::constants::DEFAULT_TIMEOUT_SECS;

use crate::client::PetFriendsClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`PetFriendsClient`].
pub struct PetFriendsClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for PetFriendsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PetFriendsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the service, including scheme.
    /// Trailing slashes are removed automatically.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Remove trailing slashes so endpoint paths concatenate cleanly.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`PetFriendsClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided,
    /// `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PetFriendsClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(PetFriendsClient { http, base_url })
    }
}
