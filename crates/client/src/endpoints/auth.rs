//! Key-exchange endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send;
use crate::error::Result;
use crate::response::ApiResponse;

/// Exchange credentials for an auth key.
///
/// The service takes the credentials as request headers. On success the
/// body carries a `key` field; unknown or mismatched credentials yield a
/// 403 with no usable key.
pub async fn get_api_key(
    client: &Client,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<ApiResponse> {
    debug!(email, "Requesting API key");

    let url = format!("{}/api/key", base_url);
    let builder = client
        .get(&url)
        .header("email", email)
        .header("password", password);
    send(builder).await
}
