//! Photo-bearing endpoints (multipart uploads).
//!
//! Multipart bodies cannot be cloned for re-send; that costs nothing here
//! since no call in this crate retries.

use std::path::Path;

use reqwest::Client;
use reqwest::multipart::Form;
use tracing::debug;

use crate::auth::AuthKey;
use crate::endpoints::{photo_part, send};
use crate::error::Result;
use crate::response::ApiResponse;

/// Create a pet with descriptive fields and a photo in one submission.
pub async fn add_new_pet(
    client: &Client,
    base_url: &str,
    auth_key: &AuthKey,
    name: &str,
    animal_type: &str,
    age: &str,
    photo_path: &Path,
) -> Result<ApiResponse> {
    debug!(name, animal_type, age, photo = %photo_path.display(), "Creating pet with photo");

    let url = format!("{}/api/pets", base_url);
    let form = Form::new()
        .text("name", name.to_string())
        .text("animal_type", animal_type.to_string())
        .text("age", age.to_string())
        .part("pet_photo", photo_part(photo_path).await?);
    let builder = client
        .post(&url)
        .header("auth_key", auth_key.as_str())
        .multipart(form);
    send(builder).await
}

/// Attach or replace the photo of an existing pet.
pub async fn set_photo(
    client: &Client,
    base_url: &str,
    auth_key: &AuthKey,
    pet_id: &str,
    photo_path: &Path,
) -> Result<ApiResponse> {
    debug!(pet_id, photo = %photo_path.display(), "Setting pet photo");

    let url = format!("{}/api/pets/set_photo/{}", base_url, pet_id);
    let form = Form::new().part("pet_photo", photo_part(photo_path).await?);
    let builder = client
        .post(&url)
        .header("auth_key", auth_key.as_str())
        .multipart(form);
    send(builder).await
}
