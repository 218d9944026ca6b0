//! Account and session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered local account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC string for the account password
    pub credential: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: String, credential: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            credential,
            created_at: Utc::now(),
        }
    }
}

/// The currently authenticated identity
///
/// This is a cached login, not a security token; nothing signs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub is_logged_in: bool,
}

impl Session {
    pub fn for_account(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            is_logged_in: true,
        }
    }

    /// Key under which this identity owns collection records
    pub fn owner_id(&self) -> String {
        self.id.to_string()
    }
}
