//! Root Handler

use axum::Json;
use serde::Serialize;

/// Welcome response for the service root
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// Service root endpoint
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Inventory ERP system",
    })
}
