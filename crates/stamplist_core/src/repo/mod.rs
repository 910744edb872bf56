//! Persistence port and its implementations.
//!
//! # Responsibility
//! - Define the two-operation record store contract used by the view-model.
//! - Keep SQL and durable row shapes behind that contract.
//!
//! # Invariants
//! - `append` is all-or-nothing: a failed write leaves no visible row.
//! - Errors say whether the failing operation was a read or a write.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory_store;
pub mod record_store;
pub mod sqlite_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Which side of the port failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Read,
    Write,
}

impl Display for StoreOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Record store failure.
#[derive(Debug)]
pub enum StoreError {
    /// Engine failure while listing or appending.
    Db { op: StoreOp, source: DbError },
    /// A persisted row could not be translated back into a `Record`.
    InvalidData(String),
    /// The adapter was asked to wrap an engine that is not usable.
    NotReady(String),
    /// Non-SQL backends reporting a failed operation.
    Unavailable { op: StoreOp, reason: String },
}

impl StoreError {
    pub fn read(err: impl Into<DbError>) -> Self {
        Self::Db {
            op: StoreOp::Read,
            source: err.into(),
        }
    }

    pub fn write(err: impl Into<DbError>) -> Self {
        Self::Db {
            op: StoreOp::Write,
            source: err.into(),
        }
    }

    /// Returns the failing operation, or `None` for adapter construction failures.
    pub fn op(&self) -> Option<StoreOp> {
        match self {
            Self::Db { op, .. } | Self::Unavailable { op, .. } => Some(*op),
            Self::InvalidData(_) => Some(StoreOp::Read),
            Self::NotReady(_) => None,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db { op, source } => write!(f, "record store {op} failed: {source}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
            Self::NotReady(message) => write!(f, "record store is not ready: {message}"),
            Self::Unavailable { op, reason } => {
                write!(f, "record store {op} unavailable: {reason}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db { source, .. } => Some(source),
            _ => None,
        }
    }
}
