pub mod health;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let index_page = ServeFile::new(state.static_dir.join("index.html"));
    let results_page = ServeFile::new(state.static_dir.join("results.html"));

    Router::new()
        // Pages
        .route("/", get_service(index_page))
        .route("/results", get_service(results_page))
        // API
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
