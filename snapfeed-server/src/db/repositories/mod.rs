mod comment_repository;
mod explore_repository;
mod post_repository;
mod story_repository;
mod user_repository;

pub use comment_repository::CommentRepository;
pub use explore_repository::ExploreRepository;
pub use post_repository::PostRepository;
pub use story_repository::StoryRepository;
pub use user_repository::UserRepository;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;

/// Store timestamps as fixed-width UTC text so lexical order is time order
pub(crate) fn to_db_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp column
pub(crate) fn from_db_timestamp(idx: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
