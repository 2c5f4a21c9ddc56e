//! Common test utilities for the contract tests.
//!
//! These tests encode the expected service contract against wiremock
//! doubles so the oracle stays executable without the live service.

#[allow(unused_imports)]
pub use petfriends_client::testing::load_fixture;

#[allow(unused_imports)]
pub use petfriends_client::{ApiResponse, AuthKey, Body, Filter, Pet, PetFriendsClient, PetList};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Auth key used by mocks that match on the `auth_key` header.
#[allow(dead_code)]
pub const TEST_AUTH_KEY: &str = "test-auth-key";

/// Build a client pointed at the given mock server.
pub fn client_for(server: &MockServer) -> PetFriendsClient {
    PetFriendsClient::builder()
        .base_url(server.uri())
        .build()
        .expect("Failed to build client")
}

#[allow(dead_code)]
pub fn test_key() -> AuthKey {
    AuthKey::new(TEST_AUTH_KEY)
}

/// Write a small JPEG-named payload to disk for photo uploads.
///
/// The payload stays valid UTF-8 (no JPEG magic bytes): wiremock's
/// `body_string_contains` refuses to inspect bodies that are not valid
/// UTF-8, and nothing in the client reads the photo content — the MIME
/// type comes from the file extension.
#[allow(dead_code)]
pub fn temp_photo() -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .prefix("pet-photo-")
        .suffix(".jpg")
        .tempfile()
        .expect("Failed to create temp photo");
    file.write_all(b"JFIF fake photo payload")
        .expect("Failed to write temp photo");
    file
}
