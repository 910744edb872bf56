//! In-process record store for tests and previews.
//!
//! Not durable. `list_all` yields insertion order and never fails.

use crate::model::record::{Record, RecordId};
use crate::repo::record_store::RecordStore;
use crate::repo::StoreResult;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

const FIXTURE_BASE_MS: i64 = 1_700_000_000_000;
const FIXTURE_STEP_MS: i64 = 60_000;
const FIXTURE_COUNT: u8 = 3;

/// Record store backed by a `Vec<Record>`.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<Record>>,
    discard_writes: bool,
}

impl InMemoryRecordStore {
    pub fn new(seed: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(seed),
            discard_writes: false,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Deterministic preview data: three records one minute apart.
    pub fn fixture() -> Self {
        let seed = (1..=FIXTURE_COUNT)
            .map(|n| {
                Record::with_id(
                    RecordId::from_uuid(Uuid::from_u128(u128::from(n))),
                    FIXTURE_BASE_MS + i64::from(n - 1) * FIXTURE_STEP_MS,
                )
            })
            .collect();
        Self::new(seed)
    }

    /// Controls whether `append` keeps the written record (default) or drops it.
    pub fn retaining(mut self, retain: bool) -> Self {
        self.discard_writes = !retain;
        self
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<Record> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_all(&self) -> StoreResult<Vec<Record>> {
        Ok(self.snapshot())
    }

    fn append(&self, record: &Record) -> StoreResult<()> {
        if !self.discard_writes {
            self.lock().push(record.clone());
        }
        Ok(())
    }
}
