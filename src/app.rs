use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/channel", get(handlers::channel_page))
        .route("/video", get(handlers::video_page))
        .route("/api/channel", get(handlers::lookup_channel))
        .route("/api/video", get(handlers::lookup_video))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
}
