//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{middleware, routing::get, Router};

use super::handlers;
use crate::presentation::middleware::error_mapping::map_error_response;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Read endpoints
        .route(
            "/get/approved_orders",
            get(handlers::orders::get_approved_orders),
        )
        .route("/get/user/{id}", get(handlers::user::get_user_full_name))
        // Service root
        .route("/ims", get(handlers::root::welcome))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness))
        // Rewrite handler failures into the structured error body
        .layer(middleware::from_fn(map_error_response))
        .with_state(state)
}
