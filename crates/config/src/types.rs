//! Configuration types for the conformance suite.
//!
//! Invariants:
//! - Passwords use `secrecy::SecretString` so `Debug` output never
//!   contains them.
//! - `Config` is plain data: it performs no I/O and no validation beyond
//!   what the loader already guaranteed.

use std::time::Duration;

use secrecy::SecretString;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// An email/password pair for the service's key-exchange endpoint.
///
/// The pair may be deliberately invalid: negative scenarios depend on
/// credentials that match no provisioned account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

/// The two credential pairs the suite drives scenarios with.
#[derive(Debug, Clone)]
pub struct TestAccounts {
    /// A provisioned account the service accepts.
    pub valid: Credentials,
    /// A pair guaranteed to be rejected.
    pub invalid: Credentials,
}

/// Connection settings for the remote service.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL including scheme, no trailing slash required.
    pub base_url: String,
    /// Per-request timeout for the HTTP client.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: crate::constants::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Complete suite configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub accounts: TestAccounts,
    /// A token the service never issued, for invalid-key scenarios.
    pub invalid_auth_key: String,
}

impl Config {
    /// Load configuration from the environment (and `.env`, unless
    /// `DOTENV_DISABLED` is set).
    pub fn from_env() -> Result<Self, crate::ConfigError> {
        crate::ConfigLoader::new().load()
    }
}
