use tracing::{info, warn};

use crate::models::AuthToken;

use super::{Credential, TokenStore};

/// Process-wide authentication state, derived from the token store.
///
/// Two states: anonymous (no token) and authenticated (token set). The state
/// is reconstructed from the store at startup and mutated only by `login` and
/// `logout`. Expiry is enforced lazily by the store, so this state can lag an
/// actual expiry until a 401 drives an explicit logout.
pub struct Session {
    store: TokenStore,
    token: Option<String>,
}

impl Session {
    /// Build the session from whatever the store currently holds.
    pub fn new(store: TokenStore) -> Self {
        let token = store.get().map(|c| c.token);
        Self { store, token }
    }

    /// Enter the authenticated state with a freshly issued token.
    pub fn login(&mut self, auth: &AuthToken) {
        let credential = Credential {
            token: auth.token.clone(),
            expiry: auth.expiry,
        };
        if let Err(e) = self.store.set(&credential) {
            warn!(error = %e, "Failed to persist credential");
        }
        self.token = Some(auth.token.clone());
        info!("Session authenticated");
    }

    /// Return to the anonymous state. Safe to call repeatedly.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear stored credential");
        }
        self.token = None;
    }

    /// The bearer token, when authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn session_in(dir: &tempfile::TempDir) -> Session {
        Session::new(TokenStore::new(dir.path().to_path_buf()))
    }

    fn auth_token(token: &str) -> AuthToken {
        AuthToken {
            token: token.to_string(),
            expiry: Utc::now() + Duration::hours(24),
        }
    }

    #[test]
    fn test_starts_anonymous_with_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let session = session_in(&dir);
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_yields_authenticated_with_supplied_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(&dir);

        session.login(&auth_token("ABC123"));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("ABC123"));
    }

    #[test]
    fn test_logout_yields_anonymous_from_any_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(&dir);

        // From authenticated.
        session.login(&auth_token("ABC123"));
        session.logout();
        assert!(!session.is_authenticated());

        // Already anonymous: idempotent.
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_reconstructed_from_persisted_credential() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut session = session_in(&dir);
        session.login(&auth_token("PERSISTED"));
        drop(session);

        let restored = session_in(&dir);
        assert!(restored.is_authenticated());
        assert_eq!(restored.token(), Some("PERSISTED"));
    }

    #[test]
    fn test_expired_credential_yields_anonymous_start() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());
        store
            .set(&Credential {
                token: "STALE".to_string(),
                expiry: Utc::now() - Duration::minutes(5),
            })
            .expect("set");

        let session = Session::new(TokenStore::new(dir.path().to_path_buf()));
        assert!(!session.is_authenticated());
    }
}
