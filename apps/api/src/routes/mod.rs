pub mod catalog;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalog::handle_index))
        .route("/health", get(health::health_handler))
        .route("/api/catalog", get(catalog::handle_catalog))
        // Analytics
        .route("/api/analytics", get(analytics::handle_analytics))
        .route("/api/trends", get(analytics::handle_trends))
        .route("/api/optimal-timing", get(analytics::handle_optimal_timing))
        // Generation
        .route("/api/generate-post", post(generation::handle_generate_post))
        .route(
            "/api/generate-content",
            post(generation::handle_generate_content),
        )
        .route(
            "/api/generate-variants",
            post(generation::handle_generate_variants),
        )
        .with_state(state)
}
