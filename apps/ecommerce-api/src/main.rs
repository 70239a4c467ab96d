//! Ecommerce API - product catalog and order placement over MongoDB

use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::MongoStore;
use std::sync::Arc;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = match &config.mongodb {
        Some(mongo) => {
            info!(
                "Using MongoDB database '{}' for {}",
                mongo.database, config.app.name
            );
            let client = database::connect(mongo).await?;
            MongoStore::new(Some(client.database(&mongo.database)))
        }
        None => {
            warn!("DATABASE_URL not set; starting without a database");
            MongoStore::new(None)
        }
    };

    let router = api::app(Arc::new(store));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );
    create_app(router, &config.server).await?;

    Ok(())
}
