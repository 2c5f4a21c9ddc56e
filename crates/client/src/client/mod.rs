//! Main PetFriends API client.
//!
//! [`PetFriendsClient`] is the facade scenarios drive: one method per
//! service operation, each delegating to [`crate::endpoints`] and
//! returning the uniform [`ApiResponse`].
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Key caching or refresh — the auth key is an explicit argument to
//!   every pet-management call, so one key can never leak between
//!   scenarios
//! - Assertions — the suite layers those on top of the returned values

pub mod builder;

use std::path::Path;

use crate::auth::AuthKey;
use crate::error::Result;
use crate::models::Filter;
use crate::response::ApiResponse;
use crate::{PetFriendsClientBuilder, endpoints};

/// PetFriends REST API client.
///
/// Construct one per test run via [`PetFriendsClient::builder()`] (or
/// `builder().from_config(..)`) and pass it into each scenario; there is
/// no global instance.
///
/// ```rust,ignore
/// let client = PetFriendsClient::builder()
///     .base_url("https://petfriends.skillfactory.ru".to_string())
///     .build()?;
/// let response = client.get_api_key("user@example.com", "password").await?;
/// assert_eq!(response.status(), 200);
/// let key = response.auth_key().unwrap();
/// ```
#[derive(Debug)]
pub struct PetFriendsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl PetFriendsClient {
    /// Create a new client builder.
    pub fn builder() -> PetFriendsClientBuilder {
        PetFriendsClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for an auth key.
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse> {
        endpoints::get_api_key(&self.http, &self.base_url, email, password).await
    }

    /// List pets scoped by `filter`.
    pub async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: Filter,
    ) -> Result<ApiResponse> {
        endpoints::get_list_of_pets(&self.http, &self.base_url, auth_key, filter).await
    }

    /// Create a pet with a photo read from `photo_path`.
    pub async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse> {
        endpoints::add_new_pet(
            &self.http,
            &self.base_url,
            auth_key,
            name,
            animal_type,
            age,
            photo_path,
        )
        .await
    }

    /// Create a pet without a photo.
    pub async fn add_new_pet_without_photo(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        endpoints::add_new_pet_without_photo(
            &self.http,
            &self.base_url,
            auth_key,
            name,
            animal_type,
            age,
        )
        .await
    }

    /// Attach or replace the photo of an existing pet.
    pub async fn set_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse> {
        endpoints::set_photo(&self.http, &self.base_url, auth_key, pet_id, photo_path).await
    }

    /// Update an existing pet's descriptive fields.
    pub async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        endpoints::update_pet_info(
            &self.http,
            &self.base_url,
            auth_key,
            pet_id,
            name,
            animal_type,
            age,
        )
        .await
    }

    /// Delete a pet by id.
    pub async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<ApiResponse> {
        endpoints::delete_pet(&self.http, &self.base_url, auth_key, pet_id).await
    }
}
