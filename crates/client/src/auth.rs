//! Auth key handling.
//!
//! The service issues an opaque bearer-style token in exchange for
//! credentials. The client never refreshes or validates it; scenarios
//! pass deliberately invalid keys to probe the 403 path.

use std::fmt;

/// Opaque token returned by the key-exchange endpoint.
///
/// Required by every pet-management call. A key obtained for account C is
/// assumed to scope operations to C; the suite documents observed
/// violations of that assumption as service defects.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey(String);

impl AuthKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw token value, as sent in the `auth_key` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for AuthKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

// Keys are account-scoped secrets; keep them out of logs.
impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKey(REDACTED)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_expose_token() {
        let key = AuthKey::new("super-secret-token");
        let debug_output = format!("{:?}", key);
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_as_str_round_trip() {
        let key = AuthKey::from("abc123");
        assert_eq!(key.as_str(), "abc123");
    }
}
