use stamplist_core::db::{open_db, open_db_in_memory};
use stamplist_core::{
    ListViewModel, Record, RecordStore, SqliteRecordStore, StoreError, StoreOp,
};

#[test]
fn append_then_list_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    // Out-of-order timestamps: listing follows insertion, not time.
    let records = vec![Record::new(300), Record::new(100), Record::new(200)];
    for record in &records {
        store.append(record).unwrap();
    }

    assert_eq!(store.list_all().unwrap(), records);
}

#[test]
fn ids_are_stable_across_reads() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    store.append(&Record::new(1)).unwrap();

    assert_eq!(store.list_all().unwrap(), store.list_all().unwrap());
}

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamplist.sqlite3");
    let record = Record::new(1_700_000_000_000);

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteRecordStore::try_new(&conn).unwrap();
        store.append(&record).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    assert_eq!(store.list_all().unwrap(), vec![record]);
}

#[test]
fn duplicate_id_write_fails_without_partial_state() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    let record = Record::new(5);
    store.append(&record).unwrap();

    let err = store.append(&record).unwrap_err();
    assert_eq!(err.op(), Some(StoreOp::Write));
    assert_eq!(store.list_all().unwrap(), vec![record]);
}

#[test]
fn corrupt_row_fails_listing_as_read_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO records (id, timestamp_ms) VALUES ('garbage', 1);",
        [],
    )
    .unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();

    let err = store.list_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
    assert_eq!(err.op(), Some(StoreOp::Read));
}

// P2: an added record is durably listed and sits last in memory.
#[test]
fn view_model_add_is_visible_through_same_adapter() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    store.append(&Record::new(1)).unwrap();

    let mut view_model = ListViewModel::new(&store);
    let added = view_model.add().cloned().unwrap();

    assert!(store.list_all().unwrap().contains(&added));
    assert_eq!(view_model.records().last(), Some(&added));
    assert_eq!(view_model.records(), store.list_all().unwrap().as_slice());
}

#[test]
fn view_model_write_failure_on_dropped_table_keeps_memory() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    store.append(&Record::new(1)).unwrap();
    let mut view_model = ListViewModel::new(&store);
    let before = view_model.records().to_vec();

    conn.execute_batch("DROP TABLE records;").unwrap();

    assert!(view_model.add().is_none());
    assert_eq!(view_model.records(), before.as_slice());
}
