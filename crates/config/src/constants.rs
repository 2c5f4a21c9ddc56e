//! Centralized constants for the conformance workspace.

/// Base URL of the public PetFriends service.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (10 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Credential pair guaranteed not to match any provisioned account.
pub const DEFAULT_INVALID_EMAIL: &str = "nosuchuser@petfriends.invalid";
pub const DEFAULT_INVALID_PASSWORD: &str = "definitely-wrong-password";

/// Token that was never issued by the service. Hex garbage of plausible
/// length so the service rejects it on lookup rather than on shape.
pub const DEFAULT_INVALID_AUTH_KEY: &str =
    "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";
