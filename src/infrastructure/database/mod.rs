//! Database Module
//!
//! MongoDB client construction. The driver pools connections internally;
//! the returned handle is cheap to clone and safe for concurrent use.

use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::DatabaseSettings;

/// Create a MongoDB client and select the application database
pub async fn connect(settings: &DatabaseSettings) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&settings.uri).await?;
    options.max_pool_size = Some(settings.max_pool_size);
    options.min_pool_size = Some(settings.min_pool_size);
    options.server_selection_timeout = Some(Duration::from_secs(settings.connect_timeout));

    let client = Client::with_options(options)?;
    Ok(client.database(&settings.database))
}
