use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Credential file name inside the storage directory
const CREDENTIAL_FILE: &str = "credential.json";

/// Bearer token and its absolute expiry, persisted between runs for
/// session continuity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub expiry: DateTime<Utc>,
}

impl Credential {
    /// A credential is valid only while `now < expiry`.
    pub fn is_expired(&self) -> bool {
        self.expiry <= Utc::now()
    }
}

/// File-backed store for the single persisted credential.
///
/// Expiry is enforced lazily: an expired credential is deleted on the next
/// read and reported as absent. Unreadable state also degrades to absent, so
/// `get` never fails the caller.
pub struct TokenStore {
    dir: PathBuf,
}

impl TokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Read the stored credential, purging it first if it has expired.
    pub fn get(&self) -> Option<Credential> {
        let path = self.credential_path();
        if !path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to read credential file");
                return None;
            }
        };

        let credential: Credential = match serde_json::from_str(&contents) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to parse credential file");
                return None;
            }
        };

        if credential.is_expired() {
            debug!("Stored credential expired, purging");
            if let Err(e) = self.clear() {
                warn!(error = %e, "Failed to purge expired credential");
            }
            return None;
        }

        Some(credential)
    }

    /// Overwrite any stored credential.
    pub fn set(&self, credential: &Credential) -> Result<()> {
        let path = self.credential_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create credential directory")?;
        }
        let contents = serde_json::to_string_pretty(credential)?;
        std::fs::write(&path, contents).context("Failed to write credential file")?;
        Ok(())
    }

    /// Delete the stored credential. Safe to call when none exists.
    pub fn clear(&self) -> Result<()> {
        let path = self.credential_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to delete credential file")?;
        }
        Ok(())
    }

    fn credential_path(&self) -> PathBuf {
        self.dir.join(CREDENTIAL_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fresh_credential() -> Credential {
        Credential {
            token: "X3LVDQIOGBPNP6TZ75IDWQVMLM".to_string(),
            expiry: Utc::now() + Duration::hours(24),
        }
    }

    #[test]
    fn test_set_then_get_round_trips_while_unexpired() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());

        let credential = fresh_credential();
        store.set(&credential).expect("set should succeed");
        assert_eq!(store.get(), Some(credential));
    }

    #[test]
    fn test_expired_credential_is_absent_and_purged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());

        let credential = Credential {
            token: "STALE".to_string(),
            expiry: Utc::now() - Duration::minutes(1),
        };
        store.set(&credential).expect("set should succeed");

        assert_eq!(store.get(), None);
        // The purge deletes the file, so a second read finds nothing either.
        assert!(!dir.path().join(CREDENTIAL_FILE).exists());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_get_with_no_stored_credential() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_overwrites_previous_credential() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());

        store.set(&fresh_credential()).expect("first set");
        let replacement = Credential {
            token: "REPLACEMENT".to_string(),
            expiry: Utc::now() + Duration::hours(1),
        };
        store.set(&replacement).expect("second set");

        assert_eq!(store.get(), Some(replacement));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());

        store.set(&fresh_credential()).expect("set");
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_corrupt_credential_file_degrades_to_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());

        std::fs::write(dir.path().join(CREDENTIAL_FILE), "not json").expect("write");
        assert_eq!(store.get(), None);
    }
}
