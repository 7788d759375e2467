//! Plaintext, file-seeded credential store.
//!
//! `FileStore` wraps a [`Config`] and adds the two write policies:
//!
//! - a read-only switch (`disable_put`) fixed at construction, for
//!   environments where new plaintext secrets must not be introduced;
//! - credential format validation (no `:` in usernames).
//!
//! Mutations stay in memory. The source file is never rewritten, so
//! `put` and `delete` do not survive a restart.

use std::path::Path;

use crate::config::Config;
use crate::credential::Credential;
use crate::error::{CredentialError, Result};
use crate::store::CredentialStore;

/// Caller-facing store over an exclusively owned [`Config`].
#[derive(Debug)]
pub struct FileStore {
    disable_put: bool,
    config: Config,
}

impl FileStore {
    /// Wrap an already loaded `Config`.
    ///
    /// `disable_put` is fixed for the lifetime of the store.
    pub fn new(disable_put: bool, config: Config) -> Self {
        Self {
            disable_put,
            config,
        }
    }

    /// Load the configuration file at `config_path` with writes enabled.
    ///
    /// # Errors
    ///
    /// Propagates `CredentialError::ConfigLoading` from [`Config::load`].
    pub fn open(config_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(false, Config::load(config_path)?))
    }

    /// Load the configuration file at `config_path` with `put` disabled.
    ///
    /// # Errors
    ///
    /// Propagates `CredentialError::ConfigLoading` from [`Config::load`].
    pub fn open_read_only(config_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(true, Config::load(config_path)?))
    }

    pub fn is_put_disabled(&self) -> bool {
        self.disable_put
    }

    /// Retrieve the credential for `server_address`.
    pub fn get(&self, server_address: &str) -> Option<Credential> {
        self.config.get_credential(server_address)
    }

    /// Save the credential for `server_address`, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::PutDisabled` when the store is read-only
    /// (checked first), or `CredentialError::BadFormat` when the username
    /// contains a colon. The map is untouched on error.
    pub fn put(&self, server_address: &str, credential: Credential) -> Result<()> {
        if self.disable_put {
            return Err(CredentialError::PutDisabled);
        }
        validate_credential_format(&credential)?;
        self.config.put_credential(server_address, credential);
        Ok(())
    }

    /// Delete the credential for `server_address`.
    ///
    /// Always permitted, including on a read-only store and for addresses
    /// that were never stored.
    pub fn delete(&self, server_address: &str) -> Result<()> {
        self.config.delete_credential(server_address);
        Ok(())
    }

    /// Sorted snapshot of the configured server addresses.
    pub fn addresses(&self) -> Vec<String> {
        self.config.addresses()
    }

    pub fn len(&self) -> usize {
        self.config.len()
    }

    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }
}

impl CredentialStore for FileStore {
    fn get(&self, server_address: &str) -> Option<Credential> {
        FileStore::get(self, server_address)
    }

    fn put(&self, server_address: &str, credential: Credential) -> Result<()> {
        FileStore::put(self, server_address, credential)
    }

    fn delete(&self, server_address: &str) -> Result<()> {
        FileStore::delete(self, server_address)
    }
}

/// Check a credential against the stored format rules.
///
/// # Errors
///
/// Returns `CredentialError::BadFormat` if the username contains `:`,
/// the separator of the `user:pass` convention.
pub fn validate_credential_format(credential: &Credential) -> Result<()> {
    if credential.username().contains(':') {
        return Err(CredentialError::BadFormat(
            "colons(:) are not allowed in username".to_string(),
        ));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
