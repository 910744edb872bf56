//! Record store contract and the durable row shape.

use crate::model::record::{Record, RecordId};
use crate::repo::{StoreError, StoreResult};
use uuid::Uuid;

/// Storage abstraction the view-model is built over.
///
/// Implementations document their own `list_all` ordering.
pub trait RecordStore {
    /// Returns every stored record.
    fn list_all(&self) -> StoreResult<Vec<Record>>;
    /// Durably stores one record before returning.
    fn append(&self, record: &Record) -> StoreResult<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn list_all(&self) -> StoreResult<Vec<Record>> {
        (**self).list_all()
    }

    fn append(&self, record: &Record) -> StoreResult<()> {
        (**self).append(record)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn list_all(&self) -> StoreResult<Vec<Record>> {
        (**self).list_all()
    }

    fn append(&self, record: &Record) -> StoreResult<()> {
        (**self).append(record)
    }
}

/// Durable representation of one record (`records` table row).
///
/// The identifier is persisted so repeated reads yield the same `RecordId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: String,
    pub timestamp_ms: i64,
}

impl StoredRecord {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id().to_string(),
            timestamp_ms: record.timestamp_ms(),
        }
    }

    /// Fails only when the stored id column is not a UUID.
    pub fn into_record(self) -> StoreResult<Record> {
        let uuid = Uuid::parse_str(&self.id).map_err(|_| {
            StoreError::InvalidData(format!("invalid uuid value `{}` in records.id", self.id))
        })?;
        Ok(Record::with_id(RecordId::from_uuid(uuid), self.timestamp_ms))
    }
}
