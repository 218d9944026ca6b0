//! Current-session tracking
//!
//! At most one session exists per store. It stays in its slot across
//! restarts until `logout` removes it.

use tracing::{info, instrument};

use crate::error::Result;
use crate::identity::IdentityStore;
use crate::models::Session;
use crate::storage::keys::SESSION_KEY;
use crate::storage::{load_slot, store_slot, KeyValueStore};

pub struct SessionManager<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SessionManager<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Authenticate and replace any existing session
    ///
    /// On failure the previous session, if any, is left in place.
    #[instrument(skip(self, credential))]
    pub fn login(&self, username: &str, credential: &str) -> Result<Session> {
        let account = IdentityStore::new(self.store).authenticate(username, credential)?;
        let session = Session::for_account(&account);

        store_slot(self.store, SESSION_KEY, &session)?;
        info!(account_id = %session.id, "Logged in");

        Ok(session)
    }

    /// Drop the current session. Safe to call when anonymous.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)?;
        info!("Logged out");
        Ok(())
    }

    /// The persisted session, if any
    pub fn current_session(&self) -> Option<Session> {
        load_slot::<Option<Session>>(self.store, SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::{Database, MemoryStore};
    use tempfile::tempdir;

    #[test]
    fn test_login_logout_cycle() {
        let store = MemoryStore::new();
        IdentityStore::new(&store).register("alice", "secret1").unwrap();
        let sessions = SessionManager::new(&store);

        assert!(sessions.current_session().is_none());

        let session = sessions.login("alice", "secret1").unwrap();
        assert_eq!(session.username, "alice");
        assert!(session.is_logged_in);
        assert_eq!(sessions.current_session(), Some(session));

        sessions.logout().unwrap();
        assert!(sessions.current_session().is_none());

        // Second logout is a no-op
        sessions.logout().unwrap();
        assert!(sessions.current_session().is_none());
    }

    #[test]
    fn test_failed_login_keeps_prior_session() {
        let store = MemoryStore::new();
        IdentityStore::new(&store).register("alice", "secret1").unwrap();
        let sessions = SessionManager::new(&store);

        let session = sessions.login("alice", "secret1").unwrap();
        let err = sessions.login("alice", "wrong").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));

        assert_eq!(sessions.current_session(), Some(session));
    }

    #[test]
    fn test_second_login_replaces_session() {
        let store = MemoryStore::new();
        let identity = IdentityStore::new(&store);
        identity.register("alice", "secret1").unwrap();
        let bob = identity.register("bob", "secret2").unwrap();
        let sessions = SessionManager::new(&store);

        sessions.login("alice", "secret1").unwrap();
        sessions.login("bob", "secret2").unwrap();

        let current = sessions.current_session().unwrap();
        assert_eq!(current.id, bob.id);
        assert_eq!(current.username, "bob");
    }

    #[test]
    fn test_corrupt_session_reads_anonymous() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "[[[").unwrap();

        assert!(SessionManager::new(&store).current_session().is_none());
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let db = Database::open(&path).unwrap();
            IdentityStore::new(&db).register("alice", "secret1").unwrap();
            SessionManager::new(&db).login("alice", "secret1").unwrap();
        }

        let db = Database::open(&path).unwrap();
        let session = SessionManager::new(&db).current_session().unwrap();
        assert_eq!(session.username, "alice");
    }
}
