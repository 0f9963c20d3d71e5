use anyhow::{Context, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use super::schema::{COLLECTIONS, SCHEMA};
use super::seed;
use crate::config::MEMORY_DB_URL;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `path` - Database file path or ":memory:" for in-memory database
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();

        let pool = if path_str.trim().eq_ignore_ascii_case(MEMORY_DB_URL) {
            // Each in-memory connection is its own database, so the pool
            // must never hold more than one.
            Pool::builder()
                .max_size(1)
                .build(SqliteConnectionManager::memory())
        } else {
            Pool::new(SqliteConnectionManager::file(path.as_ref()))
        }
        .context("Failed to create database connection pool")?;

        Ok(Self { pool })
    }

    /// Create an in-memory database pool (useful for testing)
    pub fn in_memory() -> Result<Self> {
        Self::new(MEMORY_DB_URL)
    }

    /// Initialize the database schema
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Seed the demo catalog if the users collection is empty.
    ///
    /// Returns whether anything was inserted.
    pub fn seed_if_empty(&self) -> Result<bool> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        let users: i64 = tx.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        if users > 0 {
            return Ok(false);
        }

        seed::insert_catalog(&tx)?;
        tx.commit().context("Failed to commit seed data")?;
        Ok(true)
    }

    /// Wipe every collection and insert the demo catalog again
    pub fn reseed(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        for table in COLLECTIONS {
            tx.execute(&format!("DELETE FROM {}", table), [])
                .with_context(|| format!("Failed to clear {}", table))?;
        }
        seed::insert_catalog(&tx)?;

        tx.commit().context("Failed to commit reseed")?;
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .context("Failed to get database connection from pool")
    }
}
