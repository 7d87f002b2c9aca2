//! Application state management.
//!
//! The state holds the configuration and the shared MongoDB connection
//! cache. Repositories clone the cache handle; the underlying client is
//! established lazily and shared process-wide.

use database::mongodb::ConnectionCache;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process-lifetime MongoDB connection cache
    pub cache: Arc<ConnectionCache>,
}
