pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers::handle_export_csv;
use crate::generation::handlers::handle_generate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handle_generate))
        .route("/api/export", post(handle_export_csv))
        .with_state(state)
}
