//! Storage medium trait
//!
//! The durable medium is a set of named slots, each holding one JSON
//! document. Callers always read a whole value and write a whole value back;
//! there is no partial update and no transaction spanning two calls.

use crate::error::Result;

/// Named-slot key-value medium
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
