//! Durable slot storage for FitFizz
//!
//! Every table the app keeps (accounts, session, record collections) lives in
//! one named slot as a single JSON value. `Database` backs the slots with
//! SQLite; `MemoryStore` keeps them in process.

pub mod keys;
mod memory;
mod migrations;
mod slot;
mod traits;

use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::instrument;

use crate::error::Result;

pub use memory::MemoryStore;
pub use slot::{load_slot, store_slot};
pub use traits::KeyValueStore;

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        migrations::get_current_version(&self.conn).unwrap_or(0)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT value FROM kv_slots WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_slots WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_schema_version_after_open() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.schema_version(), 1);
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let db = Database::open_in_memory().unwrap();
        db.set("slot", "[1,2,3]").unwrap();
        db.set("slot", "[4]").unwrap();

        assert_eq!(db.get("slot").unwrap().as_deref(), Some("[4]"));
    }

    #[test]
    fn test_remove_missing_key() {
        let db = Database::open_in_memory().unwrap();
        db.remove("never-set").unwrap();
        assert!(db.get("never-set").unwrap().is_none());
    }

    #[test]
    fn test_slots_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        {
            let db = Database::open(&path).unwrap();
            db.set("slot", r#"{"kept":true}"#).unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(db.get("slot").unwrap().as_deref(), Some(r#"{"kept":true}"#));
        assert_eq!(db.schema_version(), 1);
    }
}
