//! Slot value codec
//!
//! Decoding never fails: a missing, unreadable, or malformed slot reads as
//! the type's default, and the next successful write replaces it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use super::traits::KeyValueStore;
use crate::error::Result;

/// Load and decode a slot, falling back to `T::default()`
pub fn load_slot<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            error!(key, error = %e, "Slot read failed, treating as empty");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Corrupt slot, treating as empty");
            T::default()
        }
    }
}

/// Encode `value` and replace the slot with it
pub fn store_slot<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_missing_slot_is_default() {
        let store = MemoryStore::new();
        let value: Vec<String> = load_slot(&store, "nothing");
        assert!(value.is_empty());
    }

    #[test]
    fn test_corrupt_slot_is_default() {
        let store = MemoryStore::new();
        store.set("broken", "{not json").unwrap();
        let value: Vec<String> = load_slot(&store, "broken");
        assert!(value.is_empty());

        // Wrong shape is treated the same as unparseable bytes
        store.set("shape", r#"{"a": 1}"#).unwrap();
        let value: Vec<String> = load_slot(&store, "shape");
        assert!(value.is_empty());
    }

    #[test]
    fn test_store_then_load() {
        let store = MemoryStore::new();
        store_slot(&store, "names", &vec!["a".to_string(), "b".to_string()]).unwrap();
        let value: Vec<String> = load_slot(&store, "names");
        assert_eq!(value, vec!["a", "b"]);
    }
}
