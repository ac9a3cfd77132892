use aura_core::db::migrations::latest_version;
use aura_core::db::{open_db, open_db_in_memory, DbError};
use aura_core::{
    AudioEngine, Board, BoardOptions, KvRepository, SqliteKvRepository,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn put_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::new(&conn);

    assert_eq!(repo.get("aura-count").unwrap(), None);
    repo.put("aura-count", "1").unwrap();
    repo.put("aura-count", "2").unwrap();
    assert_eq!(repo.get("aura-count").unwrap().as_deref(), Some("2"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn board_survives_reopening_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aura.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut board = Board::open(
            SqliteKvRepository::new(&conn),
            AudioEngine::silent(),
            BoardOptions::default(),
        )
        .unwrap();
        let note = board.submit_note("remember the light").unwrap().unwrap();
        board.submit_note("second thought").unwrap();
        let task = board.submit_task("send invoice").unwrap().unwrap();
        board.toggle_task(task).unwrap();
        board.burst_note(note, 0).unwrap();
        board.tick(1_000).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let board = Board::open(
        SqliteKvRepository::new(&conn),
        AudioEngine::silent(),
        BoardOptions::default(),
    )
    .unwrap();
    let notes: Vec<_> = board.notes().iter().map(|n| n.text.as_str()).collect();
    assert_eq!(notes, vec!["second thought"]);
    assert_eq!(board.tasks().len(), 1);
    assert!(board.tasks()[0].completed);
    assert_eq!(board.burst_count(), 1);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
