use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, Row};

use snapfeed_types::User;

use super::{from_db_timestamp, to_db_timestamp};
use crate::db::DbPool;

const USER_COLUMNS: &str = "id, username, display_name, avatar_url, bio, posts_count,
     followers_count, following_count, is_verified, created_at";

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            display_name: row.get(2)?,
            avatar_url: row.get(3)?,
            bio: row.get(4)?,
            posts_count: row.get(5)?,
            followers_count: row.get(6)?,
            following_count: row.get(7)?,
            is_verified: row.get(8)?,
            created_at: from_db_timestamp(9, row.get(9)?)?,
        })
    }

    /// Insert a user on an existing connection or transaction
    pub fn insert(conn: &Connection, user: &User) -> Result<()> {
        conn.execute(
            &format!(
                "INSERT INTO users ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                USER_COLUMNS
            ),
            (
                &user.id,
                &user.username,
                &user.display_name,
                &user.avatar_url,
                &user.bio,
                user.posts_count,
                user.followers_count,
                user.following_count,
                user.is_verified,
                to_db_timestamp(&user.created_at),
            ),
        )
        .with_context(|| format!("Failed to insert user {}", user.id))?;
        Ok(())
    }

    /// List users in insertion order
    pub fn list(&self, limit: i64) -> Result<Vec<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM users ORDER BY rowid LIMIT ?",
            USER_COLUMNS
        ))?;

        let users = stmt
            .query_map([limit], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Get user by ID
    pub fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))?;

        let user = stmt.query_row([user_id], Self::from_row).optional()?;

        Ok(user)
    }
}
