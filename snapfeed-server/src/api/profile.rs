use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::{ApiError, ApiResult},
    db::{
        repositories::{PostRepository, UserRepository},
        seed,
    },
    state::AppState,
};
use snapfeed_types::{ProfileResponse, User, UserWithPosts};

const USERS_LIMIT: i64 = 50;
const PROFILE_POSTS_LIMIT: i64 = 50;

/// GET /users - All users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let user_repo = UserRepository::new(state.db.pool.clone());

    let users = user_repo.list(USERS_LIMIT)?;

    Ok(Json(users))
}

/// GET /users/:id - User record with their posts
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserWithPosts>> {
    let pool = state.db.pool.clone();
    let user_repo = UserRepository::new(pool.clone());
    let post_repo = PostRepository::new(pool);

    let user = user_repo
        .get_by_id(&user_id)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let posts = post_repo.list_by_user(&user_id, PROFILE_POSTS_LIMIT)?;

    Ok(Json(UserWithPosts { user, posts }))
}

/// GET /profile - The current viewer's profile, posts and saved posts
pub async fn get_current_profile(
    State(state): State<AppState>,
) -> ApiResult<Json<ProfileResponse>> {
    let pool = state.db.pool.clone();
    let user_repo = UserRepository::new(pool.clone());
    let post_repo = PostRepository::new(pool);

    let user_id = state.viewer.profile_user_id();

    let Some(user) = user_repo.get_by_id(user_id)? else {
        tracing::warn!(user_id, "Profile user missing, serving default profile");
        return Ok(Json(ProfileResponse {
            user: seed::default_profile_user(),
            posts: Vec::new(),
            saved_posts: Vec::new(),
        }));
    };

    let posts = post_repo.list_by_user(user_id, PROFILE_POSTS_LIMIT)?;
    let saved_posts = post_repo.list_saved(PROFILE_POSTS_LIMIT)?;

    Ok(Json(ProfileResponse {
        user,
        posts,
        saved_posts,
    }))
}
