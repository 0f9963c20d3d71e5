//! The fixed demo catalog loaded on first start and by `POST /seed`.

use anyhow::Result;
use rusqlite::Connection;

use snapfeed_types::{record_timestamp, Comment, Post, Story, User};

use super::repositories::{
    CommentRepository, ExploreRepository, PostRepository, StoryRepository, UserRepository,
};

struct SeedUser {
    id: &'static str,
    username: &'static str,
    display_name: &'static str,
    avatar_url: &'static str,
    bio: &'static str,
    posts_count: i64,
    followers_count: i64,
    following_count: i64,
    is_verified: bool,
}

struct SeedPost {
    id: &'static str,
    user_id: &'static str,
    username: &'static str,
    user_avatar: &'static str,
    image_url: &'static str,
    caption: &'static str,
    likes_count: i64,
    comments_count: i64,
    location: &'static str,
}

struct SeedStory {
    id: &'static str,
    user_id: &'static str,
    username: &'static str,
    user_avatar: &'static str,
    image_url: &'static str,
    is_seen: bool,
}

struct SeedComment {
    id: &'static str,
    post_id: &'static str,
    user_id: &'static str,
    username: &'static str,
    user_avatar: &'static str,
    text: &'static str,
}

const USERS: [SeedUser; 6] = [
    SeedUser {
        id: "user_1",
        username: "aria.lens",
        display_name: "Aria Chen",
        avatar_url: "https://images.unsplash.com/photo-1757700356475-40b0c6c5554e?w=150&h=150&fit=crop",
        bio: "Capturing moments through my lens. Travel & lifestyle.",
        posts_count: 142,
        followers_count: 12400,
        following_count: 534,
        is_verified: true,
    },
    SeedUser {
        id: "user_2",
        username: "marco.studio",
        display_name: "Marco Rossi",
        avatar_url: "https://images.unsplash.com/photo-1582657233895-0f37a3f150c0?w=150&h=150&fit=crop",
        bio: "Interior design & architecture. Milano based.",
        posts_count: 89,
        followers_count: 8700,
        following_count: 312,
        is_verified: false,
    },
    SeedUser {
        id: "user_3",
        username: "luna.eats",
        display_name: "Luna Park",
        avatar_url: "https://images.unsplash.com/photo-1763328719057-ff6b03c816d0?w=150&h=150&fit=crop",
        bio: "Food blogger & recipe creator. NYC eats.",
        posts_count: 256,
        followers_count: 34500,
        following_count: 189,
        is_verified: true,
    },
    SeedUser {
        id: "user_4",
        username: "kai.explores",
        display_name: "Kai Nakamura",
        avatar_url: "https://images.unsplash.com/photo-1758691737387-a89bb8adf768?w=150&h=150&fit=crop",
        bio: "Adventure seeker. Mountain lover.",
        posts_count: 67,
        followers_count: 5200,
        following_count: 421,
        is_verified: false,
    },
    SeedUser {
        id: "user_5",
        username: "sophia.vibes",
        display_name: "Sophia Williams",
        avatar_url: "https://images.unsplash.com/photo-1713261162282-57dd8043329a?w=150&h=150&fit=crop",
        bio: "Art & aesthetics. Living my best life.",
        posts_count: 198,
        followers_count: 21000,
        following_count: 276,
        is_verified: true,
    },
    SeedUser {
        id: "user_6",
        username: "dev.james",
        display_name: "James Rivera",
        avatar_url: "https://images.unsplash.com/photo-1662695089339-a2c24231a3ac?w=150&h=150&fit=crop",
        bio: "Tech & coffee enthusiast. SF bay area.",
        posts_count: 45,
        followers_count: 3100,
        following_count: 567,
        is_verified: false,
    },
];

const POSTS: [SeedPost; 6] = [
    SeedPost {
        id: "post_1",
        user_id: "user_1",
        username: "aria.lens",
        user_avatar: "https://images.unsplash.com/photo-1757700356475-40b0c6c5554e?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1713959989861-2425c95e9777?w=800&h=1000&fit=crop",
        caption: "Lost in the beauty of nature. Every trail tells a story.",
        likes_count: 1243,
        comments_count: 48,
        location: "Swiss Alps",
    },
    SeedPost {
        id: "post_2",
        user_id: "user_2",
        username: "marco.studio",
        user_avatar: "https://images.unsplash.com/photo-1582657233895-0f37a3f150c0?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1680210849773-f97a41c6b7ed?w=800&h=1000&fit=crop",
        caption: "Minimalism is not about having less. It's about making room for more of what matters.",
        likes_count: 876,
        comments_count: 32,
        location: "Milano, Italy",
    },
    SeedPost {
        id: "post_3",
        user_id: "user_3",
        username: "luna.eats",
        user_avatar: "https://images.unsplash.com/photo-1763328719057-ff6b03c816d0?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1766491764801-bc6e409b60e4?w=800&h=1000&fit=crop",
        caption: "Sunday brunch done right. Recipe link in bio!",
        likes_count: 2341,
        comments_count: 156,
        location: "Brooklyn, NY",
    },
    SeedPost {
        id: "post_4",
        user_id: "user_5",
        username: "sophia.vibes",
        user_avatar: "https://images.unsplash.com/photo-1713261162282-57dd8043329a?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1719150006656-958724675d9d?w=800&h=1000&fit=crop",
        caption: "Design is intelligence made visible.",
        likes_count: 1567,
        comments_count: 67,
        location: "Los Angeles, CA",
    },
    SeedPost {
        id: "post_5",
        user_id: "user_4",
        username: "kai.explores",
        user_avatar: "https://images.unsplash.com/photo-1758691737387-a89bb8adf768?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1748909082924-ec91097de9af?w=800&h=1000&fit=crop",
        caption: "The world is a book and those who do not travel read only one page.",
        likes_count: 3456,
        comments_count: 89,
        location: "Bali, Indonesia",
    },
    SeedPost {
        id: "post_6",
        user_id: "user_6",
        username: "dev.james",
        user_avatar: "https://images.unsplash.com/photo-1662695089339-a2c24231a3ac?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1766491765420-2f4f2c4bf49a?w=800&h=1000&fit=crop",
        caption: "Coffee and code. The perfect afternoon combo.",
        likes_count: 654,
        comments_count: 21,
        location: "San Francisco, CA",
    },
];

const STORIES: [SeedStory; 6] = [
    SeedStory {
        id: "story_1",
        user_id: "user_1",
        username: "aria.lens",
        user_avatar: "https://images.unsplash.com/photo-1757700356475-40b0c6c5554e?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1713959989861-2425c95e9777?w=600",
        is_seen: false,
    },
    SeedStory {
        id: "story_2",
        user_id: "user_3",
        username: "luna.eats",
        user_avatar: "https://images.unsplash.com/photo-1763328719057-ff6b03c816d0?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1766491764801-bc6e409b60e4?w=600",
        is_seen: false,
    },
    SeedStory {
        id: "story_3",
        user_id: "user_5",
        username: "sophia.vibes",
        user_avatar: "https://images.unsplash.com/photo-1713261162282-57dd8043329a?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1719150006656-958724675d9d?w=600",
        is_seen: true,
    },
    SeedStory {
        id: "story_4",
        user_id: "user_2",
        username: "marco.studio",
        user_avatar: "https://images.unsplash.com/photo-1582657233895-0f37a3f150c0?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1680210849773-f97a41c6b7ed?w=600",
        is_seen: false,
    },
    SeedStory {
        id: "story_5",
        user_id: "user_4",
        username: "kai.explores",
        user_avatar: "https://images.unsplash.com/photo-1758691737387-a89bb8adf768?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1748909082924-ec91097de9af?w=600",
        is_seen: false,
    },
    SeedStory {
        id: "story_6",
        user_id: "user_6",
        username: "dev.james",
        user_avatar: "https://images.unsplash.com/photo-1662695089339-a2c24231a3ac?w=150&h=150&fit=crop",
        image_url: "https://images.unsplash.com/photo-1691967057150-f57a7ca63e3e?w=600",
        is_seen: true,
    },
];

const COMMENTS: [SeedComment; 5] = [
    SeedComment {
        id: "comment_1",
        post_id: "post_1",
        user_id: "user_3",
        username: "luna.eats",
        user_avatar: "https://images.unsplash.com/photo-1763328719057-ff6b03c816d0?w=150",
        text: "Breathtaking view! Adding this to my bucket list.",
    },
    SeedComment {
        id: "comment_2",
        post_id: "post_1",
        user_id: "user_5",
        username: "sophia.vibes",
        user_avatar: "https://images.unsplash.com/photo-1713261162282-57dd8043329a?w=150",
        text: "Nature never disappoints.",
    },
    SeedComment {
        id: "comment_3",
        post_id: "post_2",
        user_id: "user_1",
        username: "aria.lens",
        user_avatar: "https://images.unsplash.com/photo-1757700356475-40b0c6c5554e?w=150",
        text: "This space is incredible!",
    },
    SeedComment {
        id: "comment_4",
        post_id: "post_3",
        user_id: "user_4",
        username: "kai.explores",
        user_avatar: "https://images.unsplash.com/photo-1758691737387-a89bb8adf768?w=150",
        text: "Looks delicious! Need the recipe ASAP.",
    },
    SeedComment {
        id: "comment_5",
        post_id: "post_5",
        user_id: "user_2",
        username: "marco.studio",
        user_avatar: "https://images.unsplash.com/photo-1582657233895-0f37a3f150c0?w=150",
        text: "Paradise on earth. Great capture!",
    },
];

/// Built-in explore grid, also served when the explore document is missing
pub const EXPLORE_IMAGES: [&str; 12] = [
    "https://images.unsplash.com/photo-1691967057150-f57a7ca63e3e?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1546019284-faf0b791e1f6?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1691967057214-39b382606ec0?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1724333937296-e7a890f99ade?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1758275557473-6e6359ced762?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1758691737387-a89bb8adf768?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1713261162282-57dd8043329a?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1680210849773-f97a41c6b7ed?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1748909082924-ec91097de9af?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1766491764801-bc6e409b60e4?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1719150006656-958724675d9d?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1766491765420-2f4f2c4bf49a?w=400&h=400&fit=crop",
];

impl SeedUser {
    fn build(&self) -> User {
        User {
            id: self.id.to_string(),
            username: self.username.to_string(),
            display_name: self.display_name.to_string(),
            avatar_url: self.avatar_url.to_string(),
            bio: self.bio.to_string(),
            posts_count: self.posts_count,
            followers_count: self.followers_count,
            following_count: self.following_count,
            is_verified: self.is_verified,
            created_at: record_timestamp(),
        }
    }
}

impl SeedPost {
    fn build(&self) -> Post {
        Post {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            username: self.username.to_string(),
            user_avatar: self.user_avatar.to_string(),
            image_url: self.image_url.to_string(),
            caption: self.caption.to_string(),
            likes_count: self.likes_count,
            comments_count: self.comments_count,
            is_liked: false,
            is_saved: false,
            location: self.location.to_string(),
            created_at: record_timestamp(),
        }
    }
}

impl SeedStory {
    fn build(&self) -> Story {
        Story {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            username: self.username.to_string(),
            user_avatar: self.user_avatar.to_string(),
            image_url: self.image_url.to_string(),
            is_seen: self.is_seen,
            created_at: record_timestamp(),
        }
    }
}

impl SeedComment {
    fn build(&self) -> Comment {
        Comment {
            id: self.id.to_string(),
            post_id: self.post_id.to_string(),
            user_id: self.user_id.to_string(),
            username: self.username.to_string(),
            user_avatar: self.user_avatar.to_string(),
            text: self.text.to_string(),
            created_at: record_timestamp(),
        }
    }
}

/// The built-in explore grid as owned strings
pub fn explore_images() -> Vec<String> {
    EXPLORE_IMAGES.iter().map(|url| url.to_string()).collect()
}

/// Profile shown when the demo viewer's user record is gone
pub fn default_profile_user() -> User {
    USERS[0].build()
}

/// Insert the whole catalog: users, posts, stories, comments, explore.
///
/// Callers own the transaction.
pub(crate) fn insert_catalog(conn: &Connection) -> Result<()> {
    for user in &USERS {
        UserRepository::insert(conn, &user.build())?;
    }
    for post in &POSTS {
        PostRepository::insert(conn, &post.build())?;
    }
    for story in &STORIES {
        StoryRepository::insert(conn, &story.build())?;
    }
    for comment in &COMMENTS {
        CommentRepository::insert(conn, &comment.build())?;
    }
    ExploreRepository::insert(conn, &explore_images())?;

    tracing::info!(
        users = USERS.len(),
        posts = POSTS.len(),
        stories = STORIES.len(),
        comments = COMMENTS.len(),
        explore_images = EXPLORE_IMAGES.len(),
        "Inserted demo catalog"
    );
    Ok(())
}
