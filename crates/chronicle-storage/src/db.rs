//! Connection bootstrap and schema migrations.
//!
//! The applied migration version is mirrored to `PRAGMA user_version`.
//! Nothing reads or writes articles before [`apply_migrations`] succeeds.

use std::path::Path;
use std::time::{Duration, Instant};

use rusqlite::Connection;
use tracing::{error, info};

use crate::error::StorageError;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("migrations/0001_init.sql"),
}];

/// Latest schema version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Open (or create) a database file and bring its schema up to date.
pub fn open_db(path: impl AsRef<Path>) -> Result<Connection, StorageError> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = Connection::open(path)
        .map_err(StorageError::from)
        .and_then(|mut conn| bootstrap_connection(&mut conn).map(|()| conn));

    log_open("file", started_at, &result);
    result
}

/// Open a private in-memory database with the schema applied.
pub fn open_db_in_memory() -> Result<Connection, StorageError> {
    let started_at = Instant::now();

    let result = Connection::open_in_memory()
        .map_err(StorageError::from)
        .and_then(|mut conn| bootstrap_connection(&mut conn).map(|()| conn));

    log_open("memory", started_at, &result);
    result
}

/// Apply every migration newer than the connection's `user_version`.
pub fn apply_migrations(conn: &mut Connection) -> Result<(), StorageError> {
    let current = current_user_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        info!(version = migration.version, "applied schema migration");
    }
    tx.commit()?;

    Ok(())
}

pub fn current_user_version(conn: &Connection) -> Result<u32, StorageError> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn bootstrap_connection(conn: &mut Connection) -> Result<(), StorageError> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)
}

fn log_open(mode: &str, started_at: Instant, result: &Result<Connection, StorageError>) {
    let duration_ms = started_at.elapsed().as_millis() as u64;
    match result {
        Ok(_) => info!(mode, duration_ms, "database opened"),
        Err(e) => error!(mode, duration_ms, error = %e, "failed to open database"),
    }
}
