//! MongoDB database connector and utilities
//!
//! Provides connection management, the process-wide connection cache, and
//! MongoDB-specific helpers.

mod cache;
mod config;
mod connector;
mod health;

pub use cache::ConnectionCache;
pub use config::MongoConfig;
pub use connector::{
    MongoError, connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::{HealthStatus, check_cache_health, check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
