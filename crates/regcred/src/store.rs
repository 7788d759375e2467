//! The credential store interface consumed by registry clients.

use crate::credential::Credential;
use crate::error::Result;

/// Resolves and mutates credentials by server address.
///
/// `get` never fails: a missing address is `None`. `delete` of an absent
/// address succeeds.
pub trait CredentialStore: Send + Sync {
    /// Credential to use for `server_address`, if any.
    fn get(&self, server_address: &str) -> Option<Credential>;

    /// Store `credential` for `server_address`, replacing any existing entry.
    fn put(&self, server_address: &str, credential: Credential) -> Result<()>;

    /// Forget the credential for `server_address`.
    fn delete(&self, server_address: &str) -> Result<()>;
}
