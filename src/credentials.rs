//! API key storage backed by the OS keychain.
//!
//! Keys never touch the settings file; they live in the platform's secure
//! store under a provider-namespaced account. Absence of a key is an
//! expected state (`Ok(None)`), distinct from a keychain failure.

use keyring::Entry;

use crate::error::{Error, Result};

const SERVICE: &str = "quicktr";

pub struct CredentialStore {
    service: String,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE.to_string(),
        }
    }

    /// Retrieves the secret stored under `account`.
    ///
    /// Returns `Ok(None)` when no entry exists; any other keychain failure
    /// is an error.
    pub fn get(&self, account: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, account)?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(Error::Credential(err)),
        }
    }

    /// Stores `secret` under `account`, replacing any previous value.
    pub fn set(&self, account: &str, secret: &str) -> Result<()> {
        let entry = Entry::new(&self.service, account)?;
        entry.set_password(secret)?;
        Ok(())
    }
}
