use chronicle_storage::db::{current_user_version, latest_version, open_db, open_db_in_memory};
use chronicle_storage::{ArticleStore, SqliteArticleStore, StorageError};
use rusqlite::Connection;

#[test]
fn fresh_database_is_at_latest_version() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
}

#[test]
fn schema_has_users_and_articles_tables() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert!(tables.contains(&"articles".to_string()));
    assert!(tables.contains(&"users".to_string()));
}

#[test]
fn users_username_is_unique() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO users (id, username, password) VALUES ('1', 'ada', 'x')",
        [],
    )
    .unwrap();
    let duplicate = conn.execute(
        "INSERT INTO users (id, username, password) VALUES ('2', 'ada', 'y')",
        [],
    );
    assert!(duplicate.is_err());
}

#[test]
fn reopening_file_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chronicle.db");

    {
        let store = SqliteArticleStore::open(&path).unwrap();
        store
            .create_article(&chronicle_core::models::article::NewArticle {
                title: "persisted".to_string(),
                excerpt: "e".to_string(),
                content: "c".to_string(),
                topic: chronicle_core::models::topic::Topic::Science,
                reading_time: 2,
            })
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    let store = SqliteArticleStore::new(conn);
    assert_eq!(store.count_articles().unwrap(), 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        StorageError::UnsupportedSchemaVersion { db_version, latest_supported }
            if db_version == latest_version() + 1 && latest_supported == latest_version()
    ));
}
