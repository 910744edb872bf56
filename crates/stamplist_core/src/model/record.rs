//! Record value object.
//!
//! # Responsibility
//! - Represent one list entry (identifier + creation timestamp).
//!
//! # Invariants
//! - `id` is generated once at creation and never recomputed.
//! - Fields are private; a `Record` cannot be mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque unique identifier of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an identifier that already exists (storage or fixtures).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stored list entry as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    /// Unix epoch milliseconds.
    timestamp_ms: i64,
}

impl Record {
    /// Creates a record with a freshly generated identifier.
    pub fn new(timestamp_ms: i64) -> Self {
        Self::with_id(RecordId::generate(), timestamp_ms)
    }

    /// Creates a record with a caller-provided identifier.
    ///
    /// Used by storage read paths and deterministic fixtures.
    pub fn with_id(id: RecordId, timestamp_ms: i64) -> Self {
        Self { id, timestamp_ms }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }
}
