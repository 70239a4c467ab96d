use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::error::StoreError;

/// Build a MongoDB client from configuration.
///
/// Connection establishment is lazy: the driver connects on first operation,
/// so this succeeds even when the server is unreachable and a dead server
/// surfaces as an operation error later.
pub async fn connect(config: &MongoConfig) -> Result<Client, StoreError> {
    info!(database = %config.database, "configuring MongoDB client");

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    Ok(client)
}
