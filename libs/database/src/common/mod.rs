//! Shared database utilities: connection retry and deduplicated lazy init.

mod init;
mod retry;

pub use init::InitCache;
pub use retry::{RetryConfig, retry, retry_with_backoff};
