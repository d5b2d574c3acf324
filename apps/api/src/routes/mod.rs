pub mod health;

use axum::{routing::get, Router};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/matching-jobs", get(handlers::handle_matching_jobs))
        .with_state(state)
}
