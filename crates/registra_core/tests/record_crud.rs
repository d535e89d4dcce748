use registra_core::db::migrations::latest_version;
use registra_core::db::open_db_in_memory;
use registra_core::{
    RecordRepository, RecordService, RepoError, SqliteRecordRepository,
};
use rusqlite::Connection;
use std::collections::HashSet;

#[test]
fn insert_and_find_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    let changed = repo.insert("Alice").unwrap();
    assert_eq!(changed, 1);

    let id = conn.last_insert_rowid();
    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Alice");
}

#[test]
fn find_by_id_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    assert!(repo.find_by_id(999).unwrap().is_none());
}

#[test]
fn find_all_on_empty_table_returns_no_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn find_all_returns_every_persisted_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    repo.insert("Alice").unwrap();
    repo.insert("Bob").unwrap();
    repo.insert("Carol").unwrap();

    // No ordering contract; compare as a set of names.
    let names: HashSet<String> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(
        names,
        HashSet::from(["Alice".to_string(), "Bob".to_string(), "Carol".to_string()])
    );
}

#[test]
fn update_changes_name_and_reports_one_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    repo.insert("draft").unwrap();
    let id = conn.last_insert_rowid();

    assert_eq!(repo.update(id, "final").unwrap(), 1);
    assert_eq!(repo.find_by_id(id).unwrap().unwrap().name, "final");
}

#[test]
fn update_missing_id_reports_zero_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    assert_eq!(repo.update(42, "nobody").unwrap(), 0);
}

#[test]
fn delete_reports_one_row_then_zero_on_repeat() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    repo.insert("ephemeral").unwrap();
    let id = conn.last_insert_rowid();

    assert_eq!(repo.delete(id).unwrap(), 1);
    assert_eq!(repo.delete(id).unwrap(), 0);
    assert!(repo.find_by_id(id).unwrap().is_none());
}

#[test]
fn deleted_ids_are_not_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    repo.insert("first").unwrap();
    let first_id = conn.last_insert_rowid();
    repo.delete(first_id).unwrap();

    repo.insert("second").unwrap();
    let second_id = conn.last_insert_rowid();
    assert!(second_id > first_id);
}

#[test]
fn empty_names_are_accepted_as_is() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();

    assert_eq!(repo.insert("").unwrap(), 1);
    let id = conn.last_insert_rowid();
    assert_eq!(repo.find_by_id(id).unwrap().unwrap().name, "");
}

#[test]
fn service_preserves_repository_semantics() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();
    let service = RecordService::new(repo);

    assert_eq!(service.create("from service").unwrap(), 1);
    let id = conn.last_insert_rowid();

    let fetched = service.get_by_id(id).unwrap().unwrap();
    assert_eq!(fetched.name, "from service");

    assert_eq!(service.update(id, "renamed").unwrap(), 1);
    assert_eq!(service.get_by_id(id).unwrap().unwrap().name, "renamed");

    let all = service.list_all().unwrap();
    assert_eq!(all.len(), 1);

    assert_eq!(service.delete(id).unwrap(), 1);
    assert_eq!(service.delete(id).unwrap(), 0);
    assert!(service.get_by_id(id).unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteRecordRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_entities_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteRecordRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("entities"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE entities (id INTEGER PRIMARY KEY AUTOINCREMENT);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteRecordRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "entities",
            column: "name"
        })
    ));
}
