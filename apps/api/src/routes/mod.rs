pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/lexicon", get(handlers::handle_get_lexicon))
        .route("/api/v1/profiles/extract", post(handlers::handle_extract))
        .route("/api/v1/resumes/score", post(handlers::handle_score))
        .route("/api/v1/resumes/screen", post(handlers::handle_screen))
        .route(
            "/api/v1/resumes/screen/batch",
            post(handlers::handle_screen_batch),
        )
        .with_state(state)
}
