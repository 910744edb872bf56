use stamplist_core::{
    ErrorContext, FixedClock, InMemoryRecordStore, ListViewModel, LoadStatus, Record,
    RecordStore, RecordingErrorReporter, StoreError, StoreOp, StoreResult,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Store whose reads and/or writes can be made to fail.
struct FaultyStore {
    inner: InMemoryRecordStore,
    fail_reads: bool,
    fail_writes: bool,
}

impl FaultyStore {
    fn failing_reads(seed: Vec<Record>) -> Self {
        Self {
            inner: InMemoryRecordStore::new(seed),
            fail_reads: true,
            fail_writes: false,
        }
    }

    fn failing_writes(seed: Vec<Record>) -> Self {
        Self {
            inner: InMemoryRecordStore::new(seed),
            fail_reads: false,
            fail_writes: true,
        }
    }
}

impl RecordStore for FaultyStore {
    fn list_all(&self) -> StoreResult<Vec<Record>> {
        if self.fail_reads {
            return Err(StoreError::Unavailable {
                op: StoreOp::Read,
                reason: "injected read failure".to_string(),
            });
        }
        self.inner.list_all()
    }

    fn append(&self, record: &Record) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable {
                op: StoreOp::Write,
                reason: "injected write failure".to_string(),
            });
        }
        self.inner.append(record)
    }
}

fn seed(timestamps: &[i64]) -> Vec<Record> {
    timestamps.iter().copied().map(Record::new).collect()
}

// P1
#[test]
fn construction_reflects_store_contents_in_order() {
    for timestamps in [&[][..], &[5][..], &[30, 10, 20, 10][..]] {
        let records = seed(timestamps);
        let store = InMemoryRecordStore::new(records.clone());
        let view_model = ListViewModel::new(&store);

        assert_eq!(view_model.records(), records.as_slice());
        assert_eq!(
            view_model.load_status(),
            LoadStatus::Loaded {
                count: records.len()
            }
        );
    }
}

// P3
#[test]
fn failed_write_leaves_list_unchanged() {
    let records = seed(&[1, 2]);
    let reporter = RecordingErrorReporter::new();
    let mut view_model = ListViewModel::with_parts(
        FaultyStore::failing_writes(records.clone()),
        FixedClock::new(3),
        reporter.clone(),
    );

    assert!(view_model.add().is_none());

    assert_eq!(view_model.records(), records.as_slice());
    let reports = reporter.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].context, ErrorContext::Add);
}

// P4
#[test]
fn failed_read_yields_empty_list_and_reports() {
    let reporter = RecordingErrorReporter::new();
    let view_model = ListViewModel::with_parts(
        FaultyStore::failing_reads(seed(&[1, 2, 3])),
        FixedClock::new(0),
        reporter.clone(),
    );

    assert!(view_model.is_empty());
    assert_eq!(view_model.load_status(), LoadStatus::Failed);
    let reports = reporter.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].context, ErrorContext::InitialLoad);
    assert!(reports[0].message.contains("injected read failure"));
}

// P5
#[test]
fn sequential_adds_produce_distinct_ids() {
    let store = InMemoryRecordStore::empty();
    let mut view_model = ListViewModel::with_parts(
        &store,
        FixedClock::new(1_000),
        RecordingErrorReporter::new(),
    );

    for _ in 0..50 {
        view_model.add().unwrap();
    }

    let ids = view_model
        .records()
        .iter()
        .map(Record::id)
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), 50);
}

#[test]
fn scenario_seeded_single_record_loads() {
    let t0 = 1_700_000_000_000;
    let seeded = Record::new(t0);
    let store = InMemoryRecordStore::new(vec![seeded.clone()]);

    let view_model = ListViewModel::new(store);

    assert_eq!(view_model.records(), &[seeded]);
    assert_eq!(view_model.records()[0].timestamp_ms(), t0);
}

#[test]
fn scenario_add_to_empty_retaining_store() {
    let store = InMemoryRecordStore::empty();
    let mut view_model = ListViewModel::new(&store);

    view_model.add().unwrap();

    assert_eq!(view_model.len(), 1);
    assert_eq!(store.list_all().unwrap().len(), 1);
    assert_eq!(view_model.records(), store.snapshot().as_slice());
}

#[test]
fn scenario_always_failing_append() {
    let mut view_model = ListViewModel::with_parts(
        FaultyStore::failing_writes(Vec::new()),
        FixedClock::new(0),
        RecordingErrorReporter::new(),
    );

    let added = view_model.add().is_some();

    assert!(!added);
    assert_eq!(view_model.len(), 0);
}

#[test]
fn non_retaining_stub_still_grows_memory() {
    let store = InMemoryRecordStore::empty().retaining(false);
    let mut view_model = ListViewModel::new(&store);

    view_model.add().unwrap();

    assert_eq!(view_model.len(), 1);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn observers_see_post_mutation_state_synchronously() {
    let store = InMemoryRecordStore::empty();
    let mut view_model = ListViewModel::with_parts(
        &store,
        FixedClock::stepping(10, 10),
        RecordingErrorReporter::new(),
    );
    let snapshots = Rc::new(RefCell::new(Vec::<Vec<i64>>::new()));

    let sink = Rc::clone(&snapshots);
    view_model.subscribe(move |records| {
        sink.borrow_mut()
            .push(records.iter().map(Record::timestamp_ms).collect());
    });
    view_model.add().unwrap();
    assert_eq!(snapshots.borrow().len(), 2);
    view_model.add().unwrap();

    assert_eq!(
        *snapshots.borrow(),
        vec![vec![], vec![10], vec![10, 20]]
    );
}

#[test]
fn failed_add_does_not_notify_observers() {
    let mut view_model = ListViewModel::with_parts(
        FaultyStore::failing_writes(Vec::new()),
        FixedClock::new(0),
        RecordingErrorReporter::new(),
    );
    let calls = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&calls);
    view_model.subscribe(move |_| *counter.borrow_mut() += 1);
    view_model.add();

    assert_eq!(*calls.borrow(), 1);
}
