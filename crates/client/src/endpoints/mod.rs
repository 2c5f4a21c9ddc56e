//! REST API endpoint implementations.
//!
//! Free functions over a shared `reqwest::Client`, one per service
//! endpoint. Each returns the uniform [`crate::ApiResponse`]; see
//! [`request`] for the send path.

mod auth;
mod pets;
mod photos;
mod request;

pub use auth::get_api_key;
pub use pets::{add_new_pet_without_photo, delete_pet, get_list_of_pets, update_pet_info};
pub use photos::{add_new_pet, set_photo};

pub(crate) use request::{photo_part, send};
