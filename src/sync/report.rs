//! Outcome of a sync run.

use log::{info, warn};

use crate::error::{FailureKind, SyncError};
use crate::models::ItemResult;

/// Which update endpoint a chunk was sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStream {
    Stocks,
    Prices,
}

impl std::fmt::Display for UpdateStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateStream::Stocks => write!(f, "stocks"),
            UpdateStream::Prices => write!(f, "prices"),
        }
    }
}

/// A chunk whose request failed as a whole
#[derive(Debug, Clone)]
pub struct ChunkFailure {
    pub stream: UpdateStream,
    pub chunk_index: usize,
    pub items: usize,
    pub kind: FailureKind,
    pub message: String,
}

/// An item the marketplace accepted the request for but did not update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedItem {
    pub stream: UpdateStream,
    pub offer_id: String,
    pub errors: Vec<String>,
}

/// Counts and failures collected over one sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Offer IDs listed in the catalog
    pub offers: usize,
    /// Records read from the supplier feed
    pub feed_records: usize,
    /// Stock updates built by reconciliation
    pub stocks_total: usize,
    /// Stock updates in chunks that were accepted
    pub stocks_pushed: usize,
    /// Stock updates with a non-zero stock
    pub in_stock: usize,
    pub prices_total: usize,
    pub prices_pushed: usize,
    pub rejected: Vec<RejectedItem>,
    pub failures: Vec<ChunkFailure>,
}

impl SyncReport {
    /// True when every chunk request succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures_of(&self, kind: FailureKind) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }

    pub(crate) fn record_chunk(
        &mut self,
        stream: UpdateStream,
        chunk_index: usize,
        items: usize,
        outcome: Result<Vec<ItemResult>, SyncError>,
    ) {
        match outcome {
            Ok(results) => {
                match stream {
                    UpdateStream::Stocks => self.stocks_pushed += items,
                    UpdateStream::Prices => self.prices_pushed += items,
                }
                for result in results.into_iter().filter(|r| !r.updated) {
                    warn!(
                        "Ozon did not update {stream} for offer {}: {}",
                        result.offer_id,
                        result.errors.join("; ")
                    );
                    self.rejected.push(RejectedItem {
                        stream,
                        offer_id: result.offer_id,
                        errors: result.errors,
                    });
                }
            }
            Err(e) => {
                warn!("Failed to push {stream} chunk {chunk_index} ({items} items): {e}");
                self.failures.push(ChunkFailure {
                    stream,
                    chunk_index,
                    items,
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
    }

    /// Writes the run summary to the log.
    pub fn log_summary(&self) {
        info!(
            "Catalog offers: {}, supplier records: {}",
            self.offers, self.feed_records
        );
        info!(
            "Stocks pushed: {}/{} ({} in stock), prices pushed: {}/{}",
            self.stocks_pushed, self.stocks_total, self.in_stock, self.prices_pushed, self.prices_total
        );
        if !self.rejected.is_empty() {
            warn!("{} items were rejected by Ozon", self.rejected.len());
        }
        if !self.is_success() {
            warn!(
                "{} chunks failed: {} timeout, {} connection, {} other",
                self.failures.len(),
                self.failures_of(FailureKind::Timeout),
                self.failures_of(FailureKind::Connection),
                self.failures_of(FailureKind::Other)
            );
        }
    }
}
