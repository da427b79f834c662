pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers::{self, MAX_RESUME_BYTES};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/evaluations", post(handlers::handle_evaluate))
        // resume cap plus headroom for the pasted job description
        .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES + 256 * 1024))
        .with_state(state)
}
