use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, config::Cors, state::AppState};

/// Build the CORS layer from the configured origin list
pub fn cors_layer(cors: &Cors) -> CorsLayer {
    match cors.allowed_origins() {
        // Credentials rule out a literal `*`, so echo the caller's origin
        None => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Assemble the full application router
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/api", get(api::admin::root))
        .route("/api/", get(api::admin::root))
        // Post routes
        .route("/api/posts", get(api::posts::get_posts))
        .route("/api/posts/:id", get(api::posts::get_post))
        .route("/api/posts/:id/like", post(api::posts::toggle_like))
        .route("/api/posts/:id/save", post(api::posts::toggle_save))
        // Comment routes
        .route("/api/posts/:id/comments", get(api::comments::get_comments))
        .route("/api/posts/:id/comment", post(api::comments::add_comment))
        // Media routes
        .route("/api/stories", get(api::media::get_stories))
        .route("/api/explore", get(api::media::get_explore))
        .route("/api/reels", get(api::media::get_reels))
        // User routes
        .route("/api/users", get(api::profile::get_users))
        .route("/api/users/:id", get(api::profile::get_user))
        .route("/api/profile", get(api::profile::get_current_profile))
        // Admin routes
        .route("/api/seed", post(api::admin::reseed))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn health_check() -> &'static str {
    "OK"
}
