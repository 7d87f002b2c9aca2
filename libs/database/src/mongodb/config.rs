use core_config::{ConfigError, FromEnv};

/// MongoDB connection settings.
///
/// Constructed manually or loaded from environment variables.
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "eventbook");
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL (required)
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

impl MongoConfig {
    /// Create a MongoConfig with a URL and database name
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Get a reference to the MongoDB URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "eventbook".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    core_config::env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URI` or `MONGODB_URL` (required) - MongoDB connection string;
///   absence is a fatal startup error
/// - `MONGODB_DATABASE` (optional, default: "eventbook") - Database name
/// - `MONGODB_APP_NAME` (optional) - Application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        // Try MONGODB_URI first, fall back to MONGODB_URL
        let url = std::env::var("MONGODB_URI")
            .or_else(|_| std::env::var("MONGODB_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URI or MONGODB_URL".to_string()))?;

        let database = core_config::env_or_default("MONGODB_DATABASE", "eventbook");
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size: parse_env("MONGODB_MAX_POOL_SIZE", "100")?,
            min_pool_size: parse_env("MONGODB_MIN_POOL_SIZE", "5")?,
            connect_timeout_secs: parse_env("MONGODB_CONNECT_TIMEOUT_SECS", "10")?,
            server_selection_timeout_secs: parse_env(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                "30",
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_with_database() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.database, "mydb");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
    }

    #[test]
    fn test_mongo_config_with_app_name() {
        let config =
            MongoConfig::with_database("mongodb://localhost:27017", "mydb").with_app_name("api");
        assert_eq!(config.app_name, Some("api".to_string()));
    }

    #[test]
    fn test_mongo_config_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URI", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("testdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://localhost:27017");
                assert_eq!(config.database, "testdb");
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_url_fallback() {
        temp_env::with_vars(
            [
                ("MONGODB_URI", None::<&str>),
                ("MONGODB_URL", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None::<&str>),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, "eventbook");
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_missing_url_is_fatal() {
        temp_env::with_vars(
            [("MONGODB_URI", None::<&str>), ("MONGODB_URL", None::<&str>)],
            || {
                let result = MongoConfig::from_env();
                assert!(result.is_err());
                assert!(result.unwrap_err().to_string().contains("MONGODB_URI"));
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_invalid_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URI", Some("mongodb://localhost:27017")),
                ("MONGODB_MAX_POOL_SIZE", Some("lots")),
            ],
            || {
                let result = MongoConfig::from_env();
                assert!(result.is_err());
            },
        );
    }
}
