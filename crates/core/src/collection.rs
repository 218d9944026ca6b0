//! Capped, owner-partitioned record logs
//!
//! Each record kind lives in one slot as a newest-first JSON array. An append
//! loads the array, pushes the new record to the front, cuts the array to the
//! kind's cap, and writes it back in full. Records beyond the cap are dropped
//! without notice.
//!
//! Nothing coordinates concurrent writers. Two processes interleaving
//! load/append/store on the same slot lose one of the appends.

use std::marker::PhantomData;

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::Result;
use crate::invariants::assert_collection_invariants;
use crate::models::CollectionRecord;
use crate::storage::{load_slot, store_slot, KeyValueStore};

pub struct CollectionStore<'a, R> {
    store: &'a dyn KeyValueStore,
    _record: PhantomData<R>,
}

impl<'a, R: CollectionRecord> CollectionStore<'a, R> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Store a new record for `owner_id` and return it
    #[instrument(skip(self, payload), fields(key = R::KEY))]
    pub fn append(&self, owner_id: &str, payload: R::Payload) -> Result<R> {
        let record = R::build(Uuid::new_v4(), owner_id, payload, Utc::now());

        let mut records = self.load();
        records.insert(0, record.clone());
        if records.len() > R::CAP {
            debug!(evicted = records.len() - R::CAP, "Collection over cap");
            records.truncate(R::CAP);
        }
        assert_collection_invariants(&records, R::CAP);

        store_slot(self.store, R::KEY, &records)?;
        Ok(record)
    }

    /// Records written by `owner_id`, newest first
    pub fn query_by_owner(&self, owner_id: &str) -> Vec<R> {
        self.load()
            .into_iter()
            .filter(|r| r.owner_id() == owner_id)
            .collect()
    }

    /// Total records held across all owners
    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load(&self) -> Vec<R> {
        load_slot(self.store, R::KEY)
    }
}
