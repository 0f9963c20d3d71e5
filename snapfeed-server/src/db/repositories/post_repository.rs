use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, Row};

use snapfeed_types::{LikeResponse, Post, SaveResponse};

use super::{from_db_timestamp, to_db_timestamp};
use crate::db::DbPool;

const POST_COLUMNS: &str = "id, user_id, username, user_avatar, image_url, caption,
     likes_count, comments_count, is_liked, is_saved, location, created_at";

pub struct PostRepository {
    pool: DbPool,
}

impl PostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
        Ok(Post {
            id: row.get(0)?,
            user_id: row.get(1)?,
            username: row.get(2)?,
            user_avatar: row.get(3)?,
            image_url: row.get(4)?,
            caption: row.get(5)?,
            likes_count: row.get(6)?,
            comments_count: row.get(7)?,
            is_liked: row.get(8)?,
            is_saved: row.get(9)?,
            location: row.get(10)?,
            created_at: from_db_timestamp(11, row.get(11)?)?,
        })
    }

    fn query(&self, clause: &str, params: impl rusqlite::Params) -> Result<Vec<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM posts {}", POST_COLUMNS, clause))?;

        let posts = stmt
            .query_map(params, Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(posts)
    }

    /// Insert a post on an existing connection or transaction
    pub fn insert(conn: &Connection, post: &Post) -> Result<()> {
        conn.execute(
            &format!(
                "INSERT INTO posts ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                POST_COLUMNS
            ),
            (
                &post.id,
                &post.user_id,
                &post.username,
                &post.user_avatar,
                &post.image_url,
                &post.caption,
                post.likes_count,
                post.comments_count,
                post.is_liked,
                post.is_saved,
                &post.location,
                to_db_timestamp(&post.created_at),
            ),
        )
        .with_context(|| format!("Failed to insert post {}", post.id))?;
        Ok(())
    }

    /// Newest posts first
    pub fn list_newest(&self, limit: i64) -> Result<Vec<Post>> {
        self.query("ORDER BY created_at DESC, rowid DESC LIMIT ?", [limit])
    }

    /// Posts in insertion order, used by the reels projection
    pub fn list_in_store_order(&self, limit: i64) -> Result<Vec<Post>> {
        self.query("ORDER BY rowid LIMIT ?", [limit])
    }

    /// Posts authored by a user, newest first
    pub fn list_by_user(&self, user_id: &str, limit: i64) -> Result<Vec<Post>> {
        self.query(
            "WHERE user_id = ? ORDER BY created_at DESC, rowid DESC LIMIT ?",
            (user_id, limit),
        )
    }

    /// Posts the viewer has saved, across all authors
    pub fn list_saved(&self, limit: i64) -> Result<Vec<Post>> {
        self.query(
            "WHERE is_saved = 1 ORDER BY created_at DESC, rowid DESC LIMIT ?",
            [limit],
        )
    }

    /// Get a single post by ID
    pub fn get_by_id(&self, post_id: &str) -> Result<Option<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM posts WHERE id = ?", POST_COLUMNS))?;

        let post = stmt.query_row([post_id], Self::from_row).optional()?;

        Ok(post)
    }

    /// Flip `is_liked` and move `likes_count` with it in one statement.
    ///
    /// SET expressions see the pre-update row, so the CASE reads the old flag.
    /// Returns `None` when no post has this id.
    pub fn toggle_like(&self, post_id: &str) -> Result<Option<LikeResponse>> {
        let conn = self.pool.get()?;
        let result = conn
            .query_row(
                "UPDATE posts
                 SET is_liked = NOT is_liked,
                     likes_count = likes_count + CASE WHEN is_liked THEN -1 ELSE 1 END
                 WHERE id = ?
                 RETURNING is_liked, likes_count",
                [post_id],
                |row| {
                    Ok(LikeResponse {
                        is_liked: row.get(0)?,
                        likes_count: row.get(1)?,
                    })
                },
            )
            .optional()
            .context("Failed to toggle like")?;

        Ok(result)
    }

    /// Flip `is_saved`. Returns `None` when no post has this id.
    pub fn toggle_save(&self, post_id: &str) -> Result<Option<SaveResponse>> {
        let conn = self.pool.get()?;
        let result = conn
            .query_row(
                "UPDATE posts SET is_saved = NOT is_saved WHERE id = ? RETURNING is_saved",
                [post_id],
                |row| {
                    Ok(SaveResponse {
                        is_saved: row.get(0)?,
                    })
                },
            )
            .optional()
            .context("Failed to toggle save")?;

        Ok(result)
    }
}
