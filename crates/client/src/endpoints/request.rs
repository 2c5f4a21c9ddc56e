//! Shared send path and multipart helpers.
//!
//! No retries, no backoff: the conformance contract runs every scenario
//! strictly sequentially and asserts on whatever the first response says.

use std::path::Path;

use reqwest::RequestBuilder;
use reqwest::multipart::Part;

use crate::error::{ClientError, Result};
use crate::response::ApiResponse;

/// Execute a request and normalize the response.
///
/// Non-2xx statuses come back as ordinary [`ApiResponse`] values; only
/// transport failures (connect, TLS, body read) are errors.
pub(crate) async fn send(builder: RequestBuilder) -> Result<ApiResponse> {
    let response = builder.send().await?;
    ApiResponse::from_response(response).await
}

/// Build the binary image part for photo-bearing endpoints.
pub(crate) async fn photo_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ClientError::PhotoRead {
            path: path.to_path_buf(),
            source,
        })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());
    let mime = mime_for_path(path);

    Ok(Part::bytes(bytes).file_name(file_name).mime_str(mime)?)
}

/// Content type from the file extension; the service only checks the
/// image/* prefix.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("images/cat.jpg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("cat.JPEG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("cat.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("cat.gif")), "image/gif");
        assert_eq!(mime_for_path(Path::new("cat")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_photo_part_missing_file() {
        let err = photo_part(Path::new("/definitely/not/here.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::PhotoRead { .. }));
    }
}
