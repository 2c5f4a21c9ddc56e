//! Pet listing and photo-less management endpoints.

use reqwest::Client;
use reqwest::multipart::Form;
use tracing::debug;

use crate::auth::AuthKey;
use crate::endpoints::send;
use crate::error::Result;
use crate::models::Filter;
use crate::response::ApiResponse;

/// List pets visible to `auth_key`, scoped by `filter`.
pub async fn get_list_of_pets(
    client: &Client,
    base_url: &str,
    auth_key: &AuthKey,
    filter: Filter,
) -> Result<ApiResponse> {
    debug!(%filter, "Listing pets");

    let url = format!("{}/api/pets", base_url);
    let builder = client
        .get(&url)
        .header("auth_key", auth_key.as_str())
        .query(&[("filter", filter.as_str())]);
    send(builder).await
}

/// Create a pet without a photo.
///
/// The descriptive fields go out verbatim, `age` included: the service
/// performs (or is expected to perform) its own validation, and several
/// scenarios probe exactly that.
pub async fn add_new_pet_without_photo(
    client: &Client,
    base_url: &str,
    auth_key: &AuthKey,
    name: &str,
    animal_type: &str,
    age: &str,
) -> Result<ApiResponse> {
    debug!(name, animal_type, age, "Creating pet without photo");

    let url = format!("{}/api/create_pet_simple", base_url);
    let form = Form::new()
        .text("name", name.to_string())
        .text("animal_type", animal_type.to_string())
        .text("age", age.to_string());
    let builder = client
        .post(&url)
        .header("auth_key", auth_key.as_str())
        .multipart(form);
    send(builder).await
}

/// Update an existing pet's descriptive fields.
pub async fn update_pet_info(
    client: &Client,
    base_url: &str,
    auth_key: &AuthKey,
    pet_id: &str,
    name: &str,
    animal_type: &str,
    age: &str,
) -> Result<ApiResponse> {
    debug!(pet_id, name, "Updating pet info");

    let url = format!("{}/api/pets/{}", base_url, pet_id);
    let builder = client
        .put(&url)
        .header("auth_key", auth_key.as_str())
        .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);
    send(builder).await
}

/// Delete a pet by id.
///
/// Repeated deletion of a gone id is a client-error status from the
/// service, not a fault.
pub async fn delete_pet(
    client: &Client,
    base_url: &str,
    auth_key: &AuthKey,
    pet_id: &str,
) -> Result<ApiResponse> {
    debug!(pet_id, "Deleting pet");

    let url = format!("{}/api/pets/{}", base_url, pet_id);
    let builder = client.delete(&url).header("auth_key", auth_key.as_str());
    send(builder).await
}
