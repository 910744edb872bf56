//! Core of the stamplist app: records, the record store port and the list view-model.
//! UI and process bootstrap live in callers; this crate holds every invariant.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod viewmodel;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::record::{Record, RecordId};
pub use repo::memory_store::InMemoryRecordStore;
pub use repo::record_store::{RecordStore, StoredRecord};
pub use repo::sqlite_store::SqliteRecordStore;
pub use repo::{StoreError, StoreOp, StoreResult};
pub use viewmodel::list_view_model::{ListViewModel, LoadStatus, SubscriptionId};
pub use viewmodel::report::{
    ErrorContext, ErrorReporter, LogErrorReporter, RecordingErrorReporter, ReportedError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
