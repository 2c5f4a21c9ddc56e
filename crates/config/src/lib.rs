//! Configuration for the PetFriends conformance suite.
//!
//! This crate provides types and a loader for the suite's configuration:
//! the service base URL, the provisioned test account, the deliberately
//! invalid credential pair used by negative scenarios, and the invalid
//! auth key constant. Values come from environment variables and an
//! optional `.env` file.

pub mod constants;
mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, Credentials, TestAccounts};
