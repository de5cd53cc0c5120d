pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::verses::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/references/parse",
            post(handlers::handle_parse_reference),
        )
        .route(
            "/api/v1/tools/explain-quran-verses",
            post(handlers::handle_verse_tool),
        )
        .route(
            "/api/v1/workflows/qverse",
            post(handlers::handle_explain_workflow),
        )
        .with_state(state)
}
