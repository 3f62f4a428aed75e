//! Run configuration.

use std::time::Duration;

use crate::error::{Result, SyncError};
use crate::ozon::DEFAULT_BASE_URL;
use crate::supplier::DEFAULT_FEED_URL;

/// Maximum stock items per `/v1/product/import/stocks` request
pub const DEFAULT_STOCK_CHUNK_SIZE: usize = 100;
/// Price items per `/v1/product/import/prices` request (API limit is 1000)
pub const DEFAULT_PRICE_CHUNK_SIZE: usize = 900;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Chunking and dispatch limits used by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
    pub stock_chunk_size: usize,
    pub price_chunk_size: usize,
    /// Chunk requests in flight at once; 1 sends them one after another
    pub max_concurrent_requests: usize,
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self {
            stock_chunk_size: DEFAULT_STOCK_CHUNK_SIZE,
            price_chunk_size: DEFAULT_PRICE_CHUNK_SIZE,
            max_concurrent_requests: 1,
        }
    }
}

impl BatchLimits {
    pub fn validate(&self) -> Result<()> {
        if self.stock_chunk_size == 0 {
            return Err(SyncError::InvalidArgument(
                "stock chunk size must be greater than zero".to_string(),
            ));
        }
        if self.price_chunk_size == 0 {
            return Err(SyncError::InvalidArgument(
                "price chunk size must be greater than zero".to_string(),
            ));
        }
        if self.max_concurrent_requests == 0 {
            return Err(SyncError::InvalidArgument(
                "max concurrent requests must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything a sync run needs, assembled from the command line and environment.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub client_id: String,
    pub seller_token: String,
    pub feed_url: String,
    pub api_base_url: String,
    pub timeout: Duration,
    pub limits: BatchLimits,
    /// Reconcile and log, but push nothing
    pub dry_run: bool,
}

impl SyncConfig {
    /// Configuration with production endpoints and default limits.
    pub fn new(client_id: impl Into<String>, seller_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            seller_token: seller_token.into(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            limits: BatchLimits::default(),
            dry_run: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(SyncError::InvalidArgument("client ID is empty".to_string()));
        }
        if self.seller_token.trim().is_empty() {
            return Err(SyncError::InvalidArgument("seller token is empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(SyncError::InvalidArgument(
                "timeout must be greater than zero".to_string(),
            ));
        }
        self.limits.validate()
    }
}
