//! Typed models for the service's JSON payloads.

use std::fmt;

use serde::Deserialize;

/// Body of a successful key-exchange response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

/// Scope selector for pet listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every pet known to the service (wire value: empty string).
    #[default]
    All,
    /// Only pets owned by the calling account.
    MyPets,
}

impl Filter {
    /// Wire value for the `filter` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "",
            Filter::MyPets => "my_pets",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pet record as returned by the service.
///
/// Identity is the service-assigned `id`; the client never generates ids.
/// `age` is kept as a string: the service stores whatever text was
/// submitted, and the suite deliberately sends non-numeric values.
#[derive(Debug, Clone, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,
    /// Base64 data URI, or empty when no photo was attached.
    #[serde(default)]
    pub pet_photo: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Pet {
    /// The service reports "no photo" as an empty string, not a null.
    pub fn has_photo(&self) -> bool {
        !self.pet_photo.is_empty()
    }
}

/// Ordered pet list returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn contains_id(&self, pet_id: &str) -> bool {
        self.pets.iter().any(|p| p.id == pet_id)
    }
}
