use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::{ApiError, ApiResult},
    db::repositories::CommentRepository,
    state::AppState,
};
use snapfeed_types::{Comment, CreateCommentRequest};

/// Maximum number of comments returned for a post
const COMMENTS_LIMIT: i64 = 100;

/// GET /posts/:id/comments - Comments on a post, newest first
///
/// An unknown post simply has no comments.
pub async fn get_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<Comment>>> {
    let comment_repo = CommentRepository::new(state.db.pool.clone());

    let comments = comment_repo.list_for_post(&post_id, COMMENTS_LIMIT)?;

    Ok(Json(comments))
}

/// POST /posts/:id/comment - Add a comment as the current viewer
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> ApiResult<Json<Comment>> {
    let comment_repo = CommentRepository::new(state.db.pool.clone());

    // Author name and avatar come from the request; the id is the viewer's
    let comment = Comment::new(
        post_id,
        state.viewer.author_id(),
        payload.username,
        payload.user_avatar,
        payload.text,
    );

    if !comment_repo.add_to_post(&comment)? {
        return Err(ApiError::NotFound("Post not found".to_string()));
    }

    tracing::info!(post_id = %comment.post_id, comment_id = %comment.id, "Comment added");

    Ok(Json(comment))
}
