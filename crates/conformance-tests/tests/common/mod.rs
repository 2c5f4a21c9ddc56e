//! Shared helpers for the live conformance scenarios.
//!
//! Every scenario builds its own client (no shared state) and runs an
//! explicit fixture phase before its assertion phase. Helpers here cover
//! both: configuration/client construction, key acquisition, and the
//! create-if-absent pet fixture.

use std::io::Write;

use anyhow::{Context, Result, ensure};
use petfriends_client::{AuthKey, Filter, Pet, PetFriendsClient, PetList};
use petfriends_config::Config;
use secrecy::ExposeSecret;

/// Smallest well-formed JPEG; the service only stores the bytes.
#[allow(dead_code)]
const MINIMAL_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x03, 0x02, 0x02, 0x02, 0x02,
    0x02, 0x03, 0x02, 0x02, 0x02, 0x03, 0x03, 0x03, 0x03, 0x04, 0x06, 0x04, 0x04, 0x04, 0x04,
    0x04, 0x08, 0x06, 0x06, 0x05, 0x06, 0x09, 0x08, 0x0A, 0x0A, 0x09, 0x08, 0x09, 0x09, 0x0A,
    0x0C, 0x0F, 0x0C, 0x0A, 0x0B, 0x0E, 0x0B, 0x09, 0x09, 0x0D, 0x11, 0x0D, 0x0E, 0x0F, 0x10,
    0x10, 0x11, 0x10, 0x0A, 0x0C, 0x12, 0x13, 0x12, 0x10, 0x13, 0x0F, 0x10, 0x10, 0x10, 0xFF,
    0xC9, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xCC, 0x00,
    0x06, 0x00, 0x10, 0x10, 0x05, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00,
    0xD2, 0xCF, 0x20, 0xFF, 0xD9,
];

/// Load configuration and build a fresh client for one scenario.
pub fn setup() -> Result<(Config, PetFriendsClient)> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let config = Config::from_env()
        .context("Suite configuration is incomplete (see PETFRIENDS_* variables)")?;
    let client = PetFriendsClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build client")?;
    Ok((config, client))
}

/// Acquire an auth key for the provisioned account.
#[allow(dead_code)]
pub async fn valid_key(client: &PetFriendsClient, config: &Config) -> Result<AuthKey> {
    let account = &config.accounts.valid;
    let response = client
        .get_api_key(&account.email, account.password.expose_secret())
        .await?;
    ensure!(
        response.status() == 200,
        "key exchange failed with status {}",
        response.status()
    );
    response
        .auth_key()
        .context("key exchange body is missing the 'key' field")
}

/// List the caller's pets as a typed model.
#[allow(dead_code)]
pub async fn my_pets(client: &PetFriendsClient, key: &AuthKey) -> Result<PetList> {
    let response = client.get_list_of_pets(key, Filter::MyPets).await?;
    ensure!(
        response.status() == 200,
        "my_pets listing failed with status {}",
        response.status()
    );
    response.parse().map_err(Into::into)
}

/// Fixture phase: make sure the account owns at least one pet, and
/// return it. Creation happens only when the listing is empty.
#[allow(dead_code)]
pub async fn ensure_my_pet(client: &PetFriendsClient, key: &AuthKey) -> Result<Pet> {
    let pets = my_pets(client, key).await?;
    if let Some(pet) = pets.pets.into_iter().next() {
        return Ok(pet);
    }

    let response = client
        .add_new_pet_without_photo(key, "Fixture", "cat", "1")
        .await?;
    ensure!(
        response.status() == 200,
        "fixture pet creation failed with status {}",
        response.status()
    );

    let pets = my_pets(client, key).await?;
    pets.pets
        .into_iter()
        .next()
        .context("account still owns no pets after fixture creation")
}

/// Write a minimal JPEG to a temp file for photo-upload scenarios.
#[allow(dead_code)]
pub fn temp_photo() -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("conformance-photo-")
        .suffix(".jpg")
        .tempfile()?;
    file.write_all(MINIMAL_JPEG)?;
    Ok(file)
}
