use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};

use crate::db::DbPool;

/// Id of the singleton explore document
pub const EXPLORE_DOCUMENT_ID: &str = "explore_data";

pub struct ExploreRepository {
    pool: DbPool,
}

impl ExploreRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Write the explore document on an existing connection or transaction
    pub fn insert(conn: &Connection, images: &[String]) -> Result<()> {
        let encoded = serde_json::to_string(images).context("Failed to encode explore images")?;
        conn.execute(
            "INSERT INTO explore (id, images) VALUES (?, ?)",
            (EXPLORE_DOCUMENT_ID, encoded),
        )
        .context("Failed to insert explore document")?;
        Ok(())
    }

    /// The stored image list, if the document exists
    pub fn get_images(&self) -> Result<Option<Vec<String>>> {
        let conn = self.pool.get()?;
        let raw: Option<String> = conn
            .query_row(
                "SELECT images FROM explore WHERE id = ?",
                [EXPLORE_DOCUMENT_ID],
                |row| row.get(0),
            )
            .optional()?;

        raw.map(|json| serde_json::from_str(&json).context("Malformed explore document"))
            .transpose()
    }
}
