//! SQLite-backed record store.
//!
//! # Responsibility
//! - Persist records into the `records` table and read them back.
//!
//! # Invariants
//! - Construction requires a fully migrated connection.
//! - `list_all` yields insertion order (`seq ASC`).
//! - `append` commits one transaction per record; failures roll back.
//! - Failures are logged at `warn`; the caller's reporter owns the `error` event.

use crate::db::migrations::{current_version, latest_version};
use crate::model::record::Record;
use crate::repo::record_store::{RecordStore, StoredRecord};
use crate::repo::{StoreError, StoreResult};
use log::{debug, warn};
use rusqlite::{params, Connection};
use std::time::Instant;

const RECORD_SELECT_SQL: &str = "SELECT id, timestamp_ms FROM records ORDER BY seq ASC;";
const RECORD_INSERT_SQL: &str = "INSERT INTO records (id, timestamp_ms) VALUES (?1, ?2);";

/// Durable record store over a borrowed SQLite connection.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `StoreError::NotReady` when the schema is missing or at another version.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn query_all(&self) -> StoreResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(RECORD_SELECT_SQL).map_err(StoreError::read)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoredRecord {
                    id: row.get("id")?,
                    timestamp_ms: row.get("timestamp_ms")?,
                })
            })
            .map_err(StoreError::read)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(StoreError::read)?.into_record()?);
        }
        Ok(records)
    }

    fn insert(&self, stored: &StoredRecord) -> StoreResult<()> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(StoreError::write)?;
        tx.execute(RECORD_INSERT_SQL, params![stored.id, stored.timestamp_ms])
            .map_err(StoreError::write)?;
        tx.commit().map_err(StoreError::write)
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn list_all(&self) -> StoreResult<Vec<Record>> {
        let started_at = Instant::now();
        let result = self.query_all();
        match &result {
            Ok(records) => debug!(
                "event=records_list module=repo status=ok count={} duration_ms={}",
                records.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=records_list module=repo status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    fn append(&self, record: &Record) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = self.insert(&StoredRecord::from_record(record));
        match &result {
            Ok(()) => debug!(
                "event=record_append module=repo status=ok record_id={} duration_ms={}",
                record.id(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=record_append module=repo status=error record_id={} duration_ms={} error={err}",
                record.id(),
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let version = current_version(conn)
        .map_err(|err| StoreError::NotReady(format!("cannot read schema version: {err}")))?;
    let latest = latest_version();
    if version != latest {
        return Err(StoreError::NotReady(format!(
            "schema version {version} does not match expected {latest}"
        )));
    }

    let has_table: bool = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'records'
            );",
            [],
            |row| row.get(0),
        )
        .map_err(|err| StoreError::NotReady(format!("cannot inspect schema: {err}")))?;
    if !has_table {
        return Err(StoreError::NotReady("missing `records` table".to_string()));
    }

    Ok(())
}
