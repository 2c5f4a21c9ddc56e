//! PetFriends REST API client.
//!
//! This crate wraps the fixed endpoint set of the PetFriends pet store
//! service (key exchange, pet listing, creation with and without photo,
//! update, deletion, photo attachment) behind [`PetFriendsClient`].
//!
//! Every call is normalized into an [`ApiResponse`] carrying the HTTP
//! status and the parsed body. A non-2xx status is an ordinary, expected
//! outcome for the conformance scenarios built on top of this crate, so
//! it is returned as a value; only transport-level failures (unreachable
//! host, unreadable photo file) surface as [`ClientError`].

mod auth;
pub mod client;
pub mod error;
pub mod models;
mod response;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthKey;
pub use client::PetFriendsClient;
pub use client::builder::PetFriendsClientBuilder;
pub use error::{ClientError, Result};
pub use models::{ApiKey, Filter, Pet, PetList};
pub use response::{ApiResponse, Body};
