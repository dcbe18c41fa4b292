//! # Inventory Server
//!
//! Read-side HTTP backend for the Inventory ERP system.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - MongoDB client
//! - HTTP server

use anyhow::Result;
use tracing::info;

use inventory_server::config::Settings;
use inventory_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    inventory_server::telemetry::init_tracing();

    info!("Starting Inventory Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
