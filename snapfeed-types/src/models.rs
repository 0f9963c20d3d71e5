use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix prepended to a post id to form the id of its reel projection
pub const REEL_ID_PREFIX: &str = "reel_";

/// Music label attached to every reel
pub const REEL_MUSIC: &str = "Original Audio";

pub const DEFAULT_COMMENT_USERNAME: &str = "you";
pub const DEFAULT_COMMENT_AVATAR: &str =
    "https://images.unsplash.com/photo-1662695089339-a2c24231a3ac?w=150";

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// Creation time for a new record.
///
/// Truncated to microseconds, the precision the store keeps, so a record
/// returned on creation matches the one read back later.
pub fn record_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Generate a fresh opaque record id
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub posts_count: i64,
    #[serde(default)]
    pub followers_count: i64,
    #[serde(default)]
    pub following_count: i64,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

/// A feed post.
///
/// `username` and `user_avatar` are copied from the author when the post is
/// created and are not refreshed if the author's profile changes later.
/// `is_liked` and `is_saved` belong to the single demo viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub location: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub image_url: String,
    #[serde(default)]
    pub is_seen: bool,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Referenced post; existence is checked on creation only
    pub post_id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub text: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a new comment with a fresh id and the current time
    pub fn new(
        post_id: impl Into<String>,
        user_id: impl Into<String>,
        username: impl Into<String>,
        user_avatar: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: new_record_id(),
            post_id: post_id.into(),
            user_id: user_id.into(),
            username: username.into(),
            user_avatar: user_avatar.into(),
            text: text.into(),
            created_at: record_timestamp(),
        }
    }
}

/// Read-time projection of a post into the reels player shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub video_thumbnail: String,
    pub caption: String,
    pub likes_count: i64,
    pub comments_count: i64,
    pub music: String,
}

impl From<Post> for Reel {
    fn from(post: Post) -> Self {
        Self {
            id: format!("{}{}", REEL_ID_PREFIX, post.id),
            user_id: post.user_id,
            username: post.username,
            user_avatar: post.user_avatar,
            video_thumbnail: post.image_url,
            caption: post.caption,
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            music: REEL_MUSIC.to_string(),
        }
    }
}

// Request/Response types for API
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
    #[serde(default = "default_comment_username")]
    pub username: String,
    #[serde(default = "default_comment_avatar")]
    pub user_avatar: String,
}

fn default_comment_username() -> String {
    DEFAULT_COMMENT_USERNAME.to_string()
}

fn default_comment_avatar() -> String {
    DEFAULT_COMMENT_AVATAR.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub is_liked: bool,
    pub likes_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub is_saved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreResponse {
    pub images: Vec<String>,
}

/// A user record with their posts inlined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithPosts {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<Post>,
}

/// The current viewer's profile page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<Post>,
    pub saved_posts: Vec<Post>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
