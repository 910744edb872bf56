//! Composition root: wires the store, view-model and view for one command.
//!
//! # Invariants
//! - The SQLite store is only constructed over a successfully opened engine.
//! - The in-memory store is used only when preview mode was requested.

use crate::cli::{Command, OutputFormat};
use crate::config::AppConfig;
use crate::view::ListView;
use log::info;
use stamplist_core::db::{open_db, DbError};
use stamplist_core::{
    InMemoryRecordStore, ListViewModel, LoadStatus, RecordStore, RecordingErrorReporter,
    ReportedError, SqliteRecordStore, StoreError, SystemClock,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

#[derive(Debug)]
pub enum AppError {
    /// The durable engine could not be opened or migrated.
    StorageInit(DbError),
    /// The opened engine was rejected by the record store adapter.
    Store(StoreError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageInit(err) if err.is_engine_unavailable() => {
                write!(f, "record store unavailable: {err}")
            }
            Self::StorageInit(err) => write!(f, "record store could not be prepared: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageInit(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// What happened during one command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub load: LoadStatus,
    pub shown: usize,
    pub added: u32,
    pub failed_adds: u32,
    pub reports: Vec<ReportedError>,
}

/// Builds the object graph for `config` and executes `command`.
///
/// # Errors
/// - `AppError::StorageInit` when the database cannot be opened.
/// - `AppError::Store` when the opened database is unusable by the adapter.
pub fn run(
    config: &AppConfig,
    command: &Command,
    out: impl Write + 'static,
) -> Result<RunSummary, AppError> {
    let reporter = RecordingErrorReporter::new();

    if config.preview {
        info!("event=app_wire module=app status=ok backend=memory");
        let view_model = ListViewModel::with_parts(
            InMemoryRecordStore::fixture(),
            SystemClock,
            reporter.clone(),
        );
        return Ok(drive(view_model, command, config.format, out, &reporter));
    }

    let conn = open_db(&config.db_path).map_err(AppError::StorageInit)?;
    let store = SqliteRecordStore::try_new(&conn)?;
    info!(
        "event=app_wire module=app status=ok backend=sqlite path={}",
        config.db_path.display()
    );
    let view_model = ListViewModel::with_parts(store, SystemClock, reporter.clone());
    Ok(drive(view_model, command, config.format, out, &reporter))
}

fn drive<S: RecordStore>(
    mut view_model: ListViewModel<S>,
    command: &Command,
    format: OutputFormat,
    out: impl Write + 'static,
    reporter: &RecordingErrorReporter,
) -> RunSummary {
    let load = view_model.load_status();
    let mut added = 0;
    let mut failed_adds = 0;

    {
        let mut view = ListView::attach(&mut view_model, format, out);
        if let Command::Add { count } = command {
            for _ in 0..*count {
                if view.on_add() {
                    added += 1;
                } else {
                    failed_adds += 1;
                }
            }
        }
    }

    RunSummary {
        load,
        shown: view_model.len(),
        added,
        failed_adds,
        reports: reporter.reports(),
    }
}
