use axum::{extract::State, Json};

use crate::{
    api::ApiResult,
    db::{
        repositories::{ExploreRepository, PostRepository, StoryRepository},
        seed,
    },
    state::AppState,
};
use snapfeed_types::{ExploreResponse, Reel, Story};

const STORIES_LIMIT: i64 = 20;
const REELS_LIMIT: i64 = 20;

/// GET /stories - Story rail
pub async fn get_stories(State(state): State<AppState>) -> ApiResult<Json<Vec<Story>>> {
    let story_repo = StoryRepository::new(state.db.pool.clone());

    let stories = story_repo.list(STORIES_LIMIT)?;

    Ok(Json(stories))
}

/// GET /explore - Explore grid, falling back to the built-in images
pub async fn get_explore(State(state): State<AppState>) -> ApiResult<Json<ExploreResponse>> {
    let explore_repo = ExploreRepository::new(state.db.pool.clone());

    let images = match explore_repo.get_images()? {
        Some(images) => images,
        None => {
            tracing::debug!("Explore document missing, serving built-in images");
            seed::explore_images()
        }
    };

    Ok(Json(ExploreResponse { images }))
}

/// GET /reels - Posts projected into reels
pub async fn get_reels(State(state): State<AppState>) -> ApiResult<Json<Vec<Reel>>> {
    let post_repo = PostRepository::new(state.db.pool.clone());

    let reels: Vec<Reel> = post_repo
        .list_in_store_order(REELS_LIMIT)?
        .into_iter()
        .map(Reel::from)
        .collect();

    Ok(Json(reels))
}
