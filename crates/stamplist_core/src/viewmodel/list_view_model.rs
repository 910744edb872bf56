//! List view-model over an injected record store.
//!
//! # Responsibility
//! - Load all records once at construction.
//! - Add new records write-first, then update memory, then notify observers.
//!
//! # Invariants
//! - Construction never fails; a failed load yields an empty list.
//! - `add()` mutates memory only after `append` succeeded.
//! - No automatic retries.

use crate::clock::{Clock, SystemClock};
use crate::model::record::Record;
use crate::repo::record_store::RecordStore;
use crate::viewmodel::report::{ErrorContext, ErrorReporter, LogErrorReporter};
use log::info;

/// Outcome of the construction-time load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    /// Load failed and the list started empty; the error went to the reporter.
    Failed,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[Record])>;

/// Mediates between a view surface and a `RecordStore`.
pub struct ListViewModel<S: RecordStore> {
    store: S,
    records: Vec<Record>,
    load_status: LoadStatus,
    clock: Box<dyn Clock>,
    reporter: Box<dyn ErrorReporter>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: RecordStore> ListViewModel<S> {
    /// Builds a view-model using the system clock and log-based error reporting.
    pub fn new(store: S) -> Self {
        Self::with_parts(store, SystemClock, LogErrorReporter)
    }

    /// Builds a view-model with every collaborator injected.
    pub fn with_parts(
        store: S,
        clock: impl Clock + 'static,
        reporter: impl ErrorReporter + 'static,
    ) -> Self {
        let (records, load_status) = match store.list_all() {
            Ok(records) => {
                let count = records.len();
                info!("event=viewmodel_load module=viewmodel status=ok count={count}");
                (records, LoadStatus::Loaded { count })
            }
            Err(err) => {
                reporter.report(ErrorContext::InitialLoad, &err);
                (Vec::new(), LoadStatus::Failed)
            }
        };

        Self {
            store,
            records,
            load_status,
            clock: Box::new(clock),
            reporter: Box::new(reporter),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    /// The injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates, persists and appends one record.
    ///
    /// Returns the new record, or `None` when the write failed. A failure is
    /// forwarded to the reporter and leaves the list untouched.
    pub fn add(&mut self) -> Option<&Record> {
        let record = Record::new(self.clock.now_ms());
        if let Err(err) = self.store.append(&record) {
            self.reporter.report(ErrorContext::Add, &err);
            return None;
        }

        info!(
            "event=record_add module=viewmodel status=ok record_id={} count={}",
            record.id(),
            self.records.len() + 1
        );
        self.records.push(record);
        self.notify();
        self.records.last()
    }

    /// Registers an observer and immediately delivers the current list to it.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&[Record]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        observer(&self.records);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(candidate, _)| *candidate != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.records);
        }
    }
}
