//! `SQLite` storage implementation
//!
//! All methods are synchronous; async callers go through `RecipeStore`.

// SQLite uses i64 for counts, Rust uses u64/usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust u64 conversions are safe within DB row counts"
)]

mod catalog;
mod recipes;
mod stats;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use recipebox_core::env_parse_with_default;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::StorageError;
use crate::migrations;

pub(crate) use catalog::{IngredientTable, MeasurementTable};

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Concurrency settings for read-write connections
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA foreign_keys = ON;",
    )?;
    Ok(())
}

/// Read-only connections cannot switch journal mode; only set the timeout
fn init_read_only_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("PRAGMA busy_timeout = 30000;")?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("RECIPEBOX_DB_POOL_SIZE", 4u32).max(1)
}

impl Storage {
    /// Open (creating if needed) a read-write database and bring its schema
    /// up to date.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or a migration fails.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(pool_size = pool_size, path = %db_path.display(), "Storage initialized");

        Ok(Self { pool })
    }

    /// Open an existing database for serving. Nothing is created or migrated.
    ///
    /// # Errors
    /// Returns error if the file is missing or its schema is out of date.
    pub fn open_read_only(db_path: &Path) -> Result<Self, StorageError> {
        // r2d2 would keep retrying a missing file until its connection timeout
        if !db_path.is_file() {
            return Err(StorageError::NotFound {
                entity: "database",
                id: db_path.display().to_string(),
            });
        }

        let manager = SqliteConnectionManager::file(db_path)
            .with_flags(OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)
            .with_init(init_read_only_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::ensure_current(&conn)?;
        drop(conn);

        tracing::info!(
            pool_size = pool_size,
            path = %db_path.display(),
            "Storage opened read-only"
        );

        Ok(Self { pool })
    }
}
