//! Account registration and credential checks
//!
//! The account table is one slot holding every account. Registration loads
//! the whole table, appends, and writes the whole table back.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::{debug, info, instrument, warn};

use crate::error::{Error, Result};
use crate::invariants::assert_accounts_invariants;
use crate::models::Account;
use crate::storage::keys::USERS_KEY;
use crate::storage::{load_slot, store_slot, KeyValueStore};

pub struct IdentityStore<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> IdentityStore<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Register a new account
    ///
    /// Usernames are compared exactly: no trimming, no case folding.
    #[instrument(skip(self, credential))]
    pub fn register(&self, username: &str, credential: &str) -> Result<Account> {
        let mut accounts = self.accounts();

        if accounts.iter().any(|a| a.username == username) {
            debug!("Username taken");
            return Err(Error::DuplicateUsername(username.to_string()));
        }

        let account = Account::new(username.to_string(), hash_credential(credential)?);
        accounts.push(account.clone());
        assert_accounts_invariants(&accounts);

        store_slot(self.store, USERS_KEY, &accounts)?;
        info!(account_id = %account.id, "Account registered");

        Ok(account)
    }

    /// Return the account registered with exactly this username and credential
    #[instrument(skip(self, credential))]
    pub fn authenticate(&self, username: &str, credential: &str) -> Result<Account> {
        self.accounts()
            .into_iter()
            .filter(|a| a.username == username)
            .find(|a| verify_credential(credential, &a.credential))
            .ok_or(Error::InvalidCredentials)
    }

    /// Find account by username
    pub fn find_by_username(&self, username: &str) -> Option<Account> {
        self.accounts().into_iter().find(|a| a.username == username)
    }

    /// All registered accounts, in registration order
    pub fn accounts(&self) -> Vec<Account> {
        load_slot(self.store, USERS_KEY)
    }
}

fn hash_credential(credential: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(credential.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash(e.to_string()))
}

fn verify_credential(credential: &str, stored: &str) -> bool {
    let parsed = match PasswordHash::new(stored) {
        Ok(hash) => hash,
        Err(e) => {
            warn!(error = %e, "Stored credential is not a valid hash");
            return false;
        }
    };

    Argon2::default()
        .verify_password(credential.as_bytes(), &parsed)
        .is_ok()
}
