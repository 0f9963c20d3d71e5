use axum::{extract::State, Json};

use crate::{api::ApiResult, state::AppState};
use snapfeed_types::MessageResponse;

/// GET / - Service banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Snapfeed API"))
}

/// POST /seed - Wipe every collection and reload the demo catalog
pub async fn reseed(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    state.db.reseed()?;

    tracing::info!("Database reseeded");

    Ok(Json(MessageResponse::new("Data reseeded successfully")))
}
