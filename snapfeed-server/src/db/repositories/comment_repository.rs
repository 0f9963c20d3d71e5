use anyhow::{Context, Result};
use rusqlite::Connection;

use snapfeed_types::Comment;

use super::{from_db_timestamp, to_db_timestamp};
use crate::db::DbPool;

pub struct CommentRepository {
    pool: DbPool,
}

impl CommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a comment on an existing connection or transaction.
    ///
    /// Does not touch the post's `comments_count`; see [`Self::add_to_post`].
    pub fn insert(conn: &Connection, comment: &Comment) -> Result<()> {
        conn.execute(
            "INSERT INTO comments (id, post_id, user_id, username, user_avatar, text, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                &comment.id,
                &comment.post_id,
                &comment.user_id,
                &comment.username,
                &comment.user_avatar,
                &comment.text,
                to_db_timestamp(&comment.created_at),
            ),
        )
        .with_context(|| format!("Failed to insert comment {}", comment.id))?;
        Ok(())
    }

    /// Store a comment and bump its post's `comments_count` by one.
    ///
    /// Both writes share a transaction. Returns `false` without writing when
    /// the target post does not exist.
    pub fn add_to_post(&self, comment: &Comment) -> Result<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let updated = tx
            .execute(
                "UPDATE posts SET comments_count = comments_count + 1 WHERE id = ?",
                [&comment.post_id],
            )
            .context("Failed to increment comment count")?;
        if updated == 0 {
            return Ok(false);
        }

        Self::insert(&tx, comment)?;
        tx.commit().context("Failed to commit comment")?;
        Ok(true)
    }

    /// Comments on a post, newest first
    pub fn list_for_post(&self, post_id: &str, limit: i64) -> Result<Vec<Comment>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, post_id, user_id, username, user_avatar, text, created_at
             FROM comments
             WHERE post_id = ?
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?",
        )?;

        let comments = stmt
            .query_map((post_id, limit), |row| {
                Ok(Comment {
                    id: row.get(0)?,
                    post_id: row.get(1)?,
                    user_id: row.get(2)?,
                    username: row.get(3)?,
                    user_avatar: row.get(4)?,
                    text: row.get(5)?,
                    created_at: from_db_timestamp(6, row.get(6)?)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comments)
    }
}
