//! The `Credential` value type: a username/password login pair.
//!
//! On disk a credential is a JSON object with exactly two string fields:
//! ```json
//! { "username": "alice", "password": "s3cr3t" }
//! ```

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A login pair for one server address.
///
/// The password is never printed by `Debug` and both fields are wiped from
/// memory when the value is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    /// Create a credential from a username and password.
    ///
    /// No format rules are checked here; the store validates on `put`.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
