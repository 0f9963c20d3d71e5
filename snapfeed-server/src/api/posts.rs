use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::{ApiError, ApiResult},
    db::repositories::PostRepository,
    state::AppState,
};
use snapfeed_types::{LikeResponse, Post, SaveResponse};

/// Maximum number of posts in the home feed
const FEED_LIMIT: i64 = 50;

fn post_not_found() -> ApiError {
    ApiError::NotFound("Post not found".to_string())
}

/// GET /posts - Newest posts first
pub async fn get_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    let post_repo = PostRepository::new(state.db.pool.clone());

    let posts = post_repo.list_newest(FEED_LIMIT)?;

    Ok(Json(posts))
}

/// GET /posts/:id - Get a single post
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Post>> {
    let post_repo = PostRepository::new(state.db.pool.clone());

    let post = post_repo
        .get_by_id(&post_id)?
        .ok_or_else(post_not_found)?;

    Ok(Json(post))
}

/// POST /posts/:id/like - Toggle the viewer's like
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<LikeResponse>> {
    let post_repo = PostRepository::new(state.db.pool.clone());

    let result = post_repo
        .toggle_like(&post_id)?
        .ok_or_else(post_not_found)?;

    tracing::debug!(
        post_id = %post_id,
        is_liked = result.is_liked,
        likes_count = result.likes_count,
        "Toggled like"
    );

    Ok(Json(result))
}

/// POST /posts/:id/save - Toggle the viewer's bookmark
pub async fn toggle_save(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<SaveResponse>> {
    let post_repo = PostRepository::new(state.db.pool.clone());

    let result = post_repo
        .toggle_save(&post_id)?
        .ok_or_else(post_not_found)?;

    tracing::debug!(post_id = %post_id, is_saved = result.is_saved, "Toggled save");

    Ok(Json(result))
}
