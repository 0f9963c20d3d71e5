use anyhow::{Context, Result};
use rusqlite::Connection;

use snapfeed_types::Story;

use super::{from_db_timestamp, to_db_timestamp};
use crate::db::DbPool;

pub struct StoryRepository {
    pool: DbPool,
}

impl StoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a story on an existing connection or transaction
    pub fn insert(conn: &Connection, story: &Story) -> Result<()> {
        conn.execute(
            "INSERT INTO stories (id, user_id, username, user_avatar, image_url, is_seen, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                &story.id,
                &story.user_id,
                &story.username,
                &story.user_avatar,
                &story.image_url,
                story.is_seen,
                to_db_timestamp(&story.created_at),
            ),
        )
        .with_context(|| format!("Failed to insert story {}", story.id))?;
        Ok(())
    }

    /// Stories in insertion order. They never expire.
    pub fn list(&self, limit: i64) -> Result<Vec<Story>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, username, user_avatar, image_url, is_seen, created_at
             FROM stories
             ORDER BY rowid
             LIMIT ?",
        )?;

        let stories = stmt
            .query_map([limit], |row| {
                Ok(Story {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    username: row.get(2)?,
                    user_avatar: row.get(3)?,
                    image_url: row.get(4)?,
                    is_seen: row.get(5)?,
                    created_at: from_db_timestamp(6, row.get(6)?)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(stories)
    }
}
