//! Configuration for the Ecommerce API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::MongoConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` is unset; the API still serves requests
    /// and reports the missing store per request.
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_without_database_url() {
        temp_env::with_vars([("DATABASE_URL", None::<&str>)], || {
            let config = Config::from_env().unwrap();
            assert!(config.mongodb.is_none());
        });
    }

    #[test]
    fn test_config_with_database_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("mongodb://localhost:27017")),
                ("DATABASE_NAME", Some("shop")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let mongodb = config.mongodb.unwrap();
                assert_eq!(mongodb.database, "shop");
            },
        );
    }
}
