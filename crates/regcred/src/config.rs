//! In-memory credential map seeded from a `config.json` style file.
//!
//! File format:
//! ```json
//! {
//!     "registry.example.com": { "username": "alice", "password": "s3cr3t" },
//!     "docker.io": { "username": "bob", "password": "hunter2" }
//! }
//! ```
//!
//! The file is read once by [`Config::load`]. Later mutations only touch
//! the in-memory map and are never written back.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::credential::Credential;
use crate::error::{CredentialError, Result};

/// Server address → credential map, safe for concurrent use.
///
/// Every operation takes the lock exactly once, so each one is atomic on
/// its own. Nothing spans two operations.
#[derive(Default)]
pub struct Config {
    credential_store: RwLock<HashMap<String, Credential>>,
}

impl Config {
    /// Load a configuration file and populate the credential map.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::ConfigLoading` if the file cannot be read,
    /// is not valid JSON, or does not have the address → credential shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|e| CredentialError::loading(path, e))?;
        let credentials: HashMap<String, Credential> =
            serde_json::from_slice(&bytes).map_err(|e| CredentialError::loading(path, e))?;

        log::debug!(
            "loaded {} credential(s) from {}",
            credentials.len(),
            path.display()
        );

        Ok(Self {
            credential_store: RwLock::new(credentials),
        })
    }

    /// Look up the credential for an exact server address.
    pub fn get_credential(&self, server_address: &str) -> Option<Credential> {
        self.read().get(server_address).cloned()
    }

    /// Insert or overwrite the credential for `server_address`.
    pub(crate) fn put_credential(&self, server_address: &str, credential: Credential) {
        log::trace!("put credential for {server_address}");
        self.write().insert(server_address.to_string(), credential);
    }

    /// Remove the credential for `server_address`. Absent keys are ignored.
    pub(crate) fn delete_credential(&self, server_address: &str) {
        if self.write().remove(server_address).is_some() {
            log::trace!("deleted credential for {server_address}");
        }
    }

    /// Sorted snapshot of the configured server addresses.
    pub fn addresses(&self) -> Vec<String> {
        let mut addresses: Vec<String> = self.read().keys().cloned().collect();
        addresses.sort();
        addresses
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    // A panicking writer cannot leave a half-applied entry behind, so a
    // poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Credential>> {
        self.credential_store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Credential>> {
        self.credential_store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl FromIterator<(String, Credential)> for Config {
    fn from_iter<I: IntoIterator<Item = (String, Credential)>>(iter: I) -> Self {
        Self {
            credential_store: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("addresses", &self.addresses())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
