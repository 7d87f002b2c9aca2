use mongodb::{Client, Database};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{MongoConfig, MongoError, connect_from_config};
use crate::common::{InitCache, RetryConfig, retry_with_backoff};

/// Application-lifetime MongoDB connection cache.
///
/// One instance is created at startup and shared (via `Arc`) with every
/// repository. The first [`acquire`](Self::acquire) establishes the client;
/// later calls return a cheap clone of it without any I/O. Concurrent first
/// calls converge on a single connection attempt, and a failed attempt is
/// cleared so the next caller retries instead of reusing the rejection.
///
/// Lifecycle is explicit: [`start`](Self::start) connects eagerly at startup
/// (with backoff for transient network issues), [`stop`](Self::stop) drops
/// the cached client on shutdown.
pub struct ConnectionCache {
    config: MongoConfig,
    client: InitCache<Client, MongoError>,
}

impl ConnectionCache {
    pub fn new(config: MongoConfig) -> Self {
        Self {
            config,
            client: InitCache::new(),
        }
    }

    /// Eagerly establish the connection, retrying with exponential backoff.
    ///
    /// Call once at startup; a failure here is fatal to the application.
    pub async fn start(&self, retry_config: Option<RetryConfig>) -> Result<Client, MongoError> {
        let retry_cfg = retry_config.unwrap_or_default();
        let client = retry_with_backoff(|| self.acquire(), retry_cfg).await?;
        info!(
            database = %self.config.database(),
            "MongoDB connection cache started"
        );
        Ok(client)
    }

    /// Return the cached client, connecting on first use.
    ///
    /// Callable concurrently and repeatedly from any request handler. Two
    /// requests arriving before any connection exists share one in-flight
    /// connection attempt; both observe the same client or the same error.
    #[instrument(skip(self))]
    pub async fn acquire(&self) -> Result<Client, MongoError> {
        let config = self.config.clone();
        self.client
            .get_or_try_init(move || async move { connect_from_config(&config).await })
            .await
            .map_err(flatten_shared_error)
    }

    /// Handle to the configured database, connecting on first use.
    pub async fn database(&self) -> Result<Database, MongoError> {
        let client = self.acquire().await?;
        Ok(client.database(self.config.database()))
    }

    /// True if a client is currently cached (no connection attempt is made).
    pub async fn is_connected(&self) -> bool {
        self.client.get().await.is_some()
    }

    /// Drop the cached client. The MongoDB driver closes its pool on drop.
    pub async fn stop(&self) {
        self.client.clear().await;
        info!("MongoDB connection cache stopped");
    }
}

/// Waiters on a shared attempt receive the error behind an `Arc`; unwrap it
/// when we are the only holder, otherwise keep the message.
fn flatten_shared_error(err: Arc<MongoError>) -> MongoError {
    match Arc::try_unwrap(err) {
        Ok(err) => err,
        Err(shared) => MongoError::ConnectionFailed(shared.to_string()),
    }
}
