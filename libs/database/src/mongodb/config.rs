use core_config::ConfigError;

/// MongoDB connection settings.
///
/// Can be constructed manually or loaded from environment variables. The
/// connection URL is deliberately optional at the application level: a
/// deployment without `DATABASE_URL` still starts, it just runs with an
/// unconfigured store.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

const DEFAULT_DATABASE: &str = "ecommerce";

impl MongoConfig {
    /// Create a config with a URL and the default database name.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Create a config with a specific database name.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    /// Set the application name for server logs.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Load from environment variables.
    ///
    /// Returns `Ok(None)` when `DATABASE_URL` is unset; a missing database
    /// connection is a supported runtime state, not a startup failure.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` (optional) - MongoDB connection string
    /// - `DATABASE_NAME` (optional, default: "ecommerce") - database name
    /// - `MONGODB_APP_NAME` (optional) - application name for server logs
    /// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
    /// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
    /// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
    /// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            return Ok(None);
        };

        let database =
            std::env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let max_pool_size = env_parsed("MONGODB_MAX_POOL_SIZE", 100)?;
        let min_pool_size = env_parsed("MONGODB_MIN_POOL_SIZE", 5)?;
        let connect_timeout_secs = env_parsed("MONGODB_CONNECT_TIMEOUT_SECS", 10)?;
        let server_selection_timeout_secs =
            env_parsed("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", 30)?;

        Ok(Some(Self {
            url,
            database,
            app_name,
            max_pool_size,
            min_pool_size,
            connect_timeout_secs,
            server_selection_timeout_secs,
        }))
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
        Err(_) => Ok(default),
    }
}
