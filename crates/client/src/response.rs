//! Uniform `(status, body)` result for every API call.
//!
//! The conformance contract treats non-2xx statuses as data to assert on,
//! never as errors. This module owns the conversion from a raw
//! `reqwest::Response` into that shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::AuthKey;
use crate::error::{ClientError, Result};

/// Parsed response body.
///
/// The service answers JSON on the documented paths but plain text (or an
/// empty body) on some error and delete paths, so both forms are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

/// Status code plus parsed body of a completed API call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: Body,
}

impl ApiResponse {
    /// Consume a raw response. Transport failures while reading the body
    /// are the only error path.
    pub(crate) async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Text(text),
        };
        Ok(Self { status, body })
    }

    #[cfg(any(feature = "test-utils", test))]
    pub fn from_parts(status: u16, body: Body) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Top-level JSON field, if the body is JSON and has it.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => value.get(name),
            Body::Text(_) => None,
        }
    }

    /// Whether the body is a JSON object containing `name`.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Decode the JSON body into a typed model.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            Body::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| ClientError::InvalidResponse(e.to_string())),
            Body::Text(_) => Err(ClientError::InvalidResponse(
                "expected a JSON body".to_string(),
            )),
        }
    }

    /// Extract the `key` field of a successful key-exchange response.
    pub fn auth_key(&self) -> Option<AuthKey> {
        self.field("key")
            .and_then(Value::as_str)
            .map(AuthKey::from)
    }
}
