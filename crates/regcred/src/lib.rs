//! regcred — plaintext registry credential store.
//!
//! Resolves username/password pairs for registry server addresses from a
//! `config.json` style file, with a read-only mode for environments where
//! new plaintext secrets must not be written.

pub mod config;
pub mod credential;
pub mod error;
pub mod file_store;
pub mod store;

// Re-export primary types
pub use config::Config;
pub use credential::Credential;
pub use error::{
    CredentialError, LoadFailure, Result, ERR_BAD_CREDENTIAL_FORMAT, ERR_PLAINTEXT_PUT_DISABLED,
};
pub use file_store::{validate_credential_format, FileStore};
pub use store::CredentialStore;
