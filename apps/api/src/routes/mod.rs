pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document evaluation API
        .route("/api/v1/documents", post(handlers::handle_upload))
        .route(
            "/api/v1/documents/history",
            get(handlers::handle_history),
        )
        .route("/api/v1/verify", post(handlers::handle_verify))
        .layer(DefaultBodyLimit::max(handlers::MAX_UPLOAD_BYTES))
        .with_state(state)
}
