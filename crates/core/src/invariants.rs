//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::models::{Account, CollectionRecord};

/// Validate that no two accounts share a username
pub fn assert_accounts_invariants(accounts: &[Account]) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::new();
        for account in accounts {
            debug_assert!(
                seen.insert(account.username.as_str()),
                "Username {:?} registered twice",
                account.username
            );
        }
    }
}

/// Validate a collection about to be written back
pub fn assert_collection_invariants<R: CollectionRecord>(records: &[R], cap: usize) {
    debug_assert!(
        records.len() <= cap,
        "Collection {} holds {} records, cap is {}",
        R::KEY,
        records.len(),
        cap
    );

    if cfg!(debug_assertions) {
        let mut seen = HashSet::new();
        for record in records {
            debug_assert!(
                seen.insert(record.id()),
                "Record {} appears twice in {}",
                record.id(),
                R::KEY
            );
        }
    }
}
