//! SQLite storage engine bootstrap.
//!
//! # Responsibility
//! - Open and configure the connection backing the durable record store.
//! - Apply schema migrations before any record is read or written.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - A connection is only handed out after migrations succeed.
//! - Bootstrap failures name the stage that failed, so callers can tell an
//!   unreachable engine from a reachable one with an unusable schema.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Where an engine was asked to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

impl Display for DbLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(":memory:"),
        }
    }
}

/// Record store engine failure.
#[derive(Debug)]
pub enum DbError {
    /// SQLite refused to open or create the database.
    Open {
        location: DbLocation,
        source: rusqlite::Error,
    },
    /// The database opened but connection settings could not be applied.
    Configure {
        location: DbLocation,
        source: rusqlite::Error,
    },
    /// Migrating to `version` failed; the migration transaction rolled back.
    Migrate { version: u32, source: rusqlite::Error },
    /// The file was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A statement failed on an already bootstrapped connection.
    Statement(rusqlite::Error),
}

impl DbError {
    /// `true` when no usable connection was ever obtained.
    pub fn is_engine_unavailable(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Configure { .. })
    }

    pub fn location(&self) -> Option<&DbLocation> {
        match self {
            Self::Open { location, .. } | Self::Configure { location, .. } => Some(location),
            _ => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { location, source } => {
                write!(f, "cannot open database `{location}`: {source}")
            }
            Self::Configure { location, source } => {
                write!(f, "cannot configure database `{location}`: {source}")
            }
            Self::Migrate { version, source } => {
                write!(f, "migration to schema version {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "record store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Statement(source) => write!(f, "sqlite: {source}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. }
            | Self::Configure { source, .. }
            | Self::Migrate { source, .. }
            | Self::Statement(source) => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Statement(value)
    }
}
