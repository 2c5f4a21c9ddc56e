//! Error types for the PetFriends client.
//!
//! The conformance contract keeps this taxonomy deliberately small:
//! authentication failures, validation rejections, and operations on
//! missing or foreign pets are all *expected* outcomes and travel through
//! [`crate::ApiResponse`] as status codes. Only faults no scenario
//! exercises — transport problems and local file access — raise errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can abort a client call.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level HTTP failure (connection, TLS, request build).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid base URL supplied to the builder.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Body could not be decoded into the requested model.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A photo file could not be read from disk.
    #[error("Failed to read photo at {path}: {source}")]
    PhotoRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_read_error_includes_path() {
        let err = ClientError::PhotoRead {
            path: PathBuf::from("/tmp/missing.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.jpg"));
    }

    #[test]
    fn test_invalid_response_message() {
        let err = ClientError::InvalidResponse("missing field `pets`".to_string());
        assert!(err.to_string().contains("missing field `pets`"));
    }
}
