//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use tower::ServiceExt;

use inventory_server::config::{CorsSettings, DatabaseSettings, ServerSettings, Settings};
use inventory_server::infrastructure::database;
use inventory_server::presentation::http::routes;
use inventory_server::presentation::middleware::cors;
use inventory_server::startup::AppState;

/// Settings pointing the store at a port nothing listens on, with a short
/// selection timeout. Routes that never touch the store work as-is; routes
/// that do fail fast with a store error.
pub fn unreachable_store_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            uri: "mongodb://127.0.0.1:1/?directConnection=true".into(),
            database: "inventory_test".into(),
            max_pool_size: 2,
            min_pool_size: 1,
            connect_timeout: 1,
        },
        cors: CorsSettings {
            allowed_origins: Vec::new(),
        },
        environment: "test".into(),
    }
}

/// Settings for end-to-end tests against a live MongoDB.
pub fn live_store_settings(database: &str) -> Settings {
    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017/?directConnection=true".into());

    let mut settings = unreachable_store_settings();
    settings.database.uri = uri;
    settings.database.database = database.into();
    settings.database.connect_timeout = 5;
    settings
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test application over a lazily-connected store handle.
    ///
    /// The MongoDB driver does not dial the server until a query runs, so
    /// building the router never requires a live store.
    pub async fn new() -> Self {
        Self::with_settings(unreachable_store_settings()).await
    }

    /// Create a test application from explicit settings
    pub async fn with_settings(settings: Settings) -> Self {
        let db = database::connect(&settings.database)
            .await
            .expect("client options should parse");

        let state = AppState {
            db,
            settings: Arc::new(settings.clone()),
        };

        let router = routes::create_router(state).layer(cors::create_cors_layer(&settings.cors));

        Self { router }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a GET request carrying an Origin header
    pub async fn get_with_origin(&self, uri: &str, origin: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .header("Origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
