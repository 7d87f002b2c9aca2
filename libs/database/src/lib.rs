//! Database library providing the MongoDB connector and connection cache.
//!
//! This library provides a unified interface for connecting to MongoDB and
//! sharing one client across concurrent request handlers.
//!
//! # Examples
//!
//! ## Direct connection
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("eventbook");
//! ```
//!
//! ## Connection cache (recommended)
//!
//! ```ignore
//! use database::mongodb::{ConnectionCache, MongoConfig};
//!
//! let cache = ConnectionCache::new(MongoConfig::from_env()?);
//! cache.start(None).await?;              // eager connect at startup
//! let db = cache.database().await?;      // cheap clone on every later call
//! cache.stop().await;                    // lifecycle teardown
//! ```

pub mod common;
pub mod mongodb;

pub use common::{InitCache, RetryConfig, retry, retry_with_backoff};
