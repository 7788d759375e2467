//! Error types for the credential store.
//!
//! Errors never carry secret material: only server addresses, file paths
//! and the offending rule are included in messages.

use std::path::PathBuf;

/// Message returned when `put` is called on a read-only store.
pub const ERR_PLAINTEXT_PUT_DISABLED: &str = "Putting plaintext credentials is disabled";

/// Prefix of every credential format error message.
pub const ERR_BAD_CREDENTIAL_FORMAT: &str = "Bad credential format";

/// Credential store error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The configuration file could not be read or parsed.
    #[error("Failed to read the configuration file: {}", .path.display())]
    ConfigLoading {
        path: PathBuf,
        #[source]
        source: LoadFailure,
    },

    /// `put` was called on a store opened with writes disabled.
    #[error("Putting plaintext credentials is disabled")]
    PutDisabled,

    /// The credential violates the stored format rules.
    #[error("Bad credential format: {0}")]
    BadFormat(String),
}

/// Underlying cause of a [`CredentialError::ConfigLoading`].
#[derive(Debug, thiserror::Error)]
pub enum LoadFailure {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file format: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CredentialError {
    pub(crate) fn loading(path: impl Into<PathBuf>, source: impl Into<LoadFailure>) -> Self {
        Self::ConfigLoading {
            path: path.into(),
            source: source.into(),
        }
    }

    /// True for errors raised by the write-disable policy.
    ///
    /// Callers typically recover from these by falling back to another
    /// credential source.
    pub fn is_policy(&self) -> bool {
        matches!(self, Self::PutDisabled)
    }

    /// True for errors raised by credential format validation.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::BadFormat(_))
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, CredentialError>;
