//! Route definitions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Inputs
        .route("/api/v1/controls", get(handlers::controls))
        // Model
        .route("/api/v1/compute", post(handlers::compute_outputs))
        .route(
            "/api/v1/dashboard",
            get(handlers::dashboard_query).post(handlers::dashboard_body),
        )
        .route("/api/v1/sensitivity", post(handlers::sensitivity))
}
