//! Sync run: collaborators, orchestration and reporting.
//!
//! The orchestrator only talks to the outside world through the traits in
//! this module. [`OzonApi`] and [`SupplierFeed`] are the production
//! implementations, [`SimulatedUpdater`] stands in for the updaters on a dry
//! run.

mod orchestrator;
mod report;
mod simulation;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ItemResult, OfferIdSet, PriceUpdate, StockUpdate, SupplierStockRecord};
use crate::ozon::OzonApi;
use crate::supplier::SupplierFeed;

pub use orchestrator::SyncOrchestrator;
pub use report::{ChunkFailure, RejectedItem, SyncReport, UpdateStream};
pub use simulation::SimulatedUpdater;

/// Source of the complete set of offer IDs in the marketplace catalog.
#[async_trait]
pub trait CatalogLister: Send + Sync {
    async fn list_offer_ids(&self) -> Result<OfferIdSet>;
}

/// Source of supplier stock records.
#[async_trait]
pub trait SupplierFeedFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<SupplierStockRecord>>;
}

/// Pushes one chunk of stock updates to the marketplace.
#[async_trait]
pub trait StockUpdater: Send + Sync {
    async fn push_stocks(&self, chunk: &[StockUpdate]) -> Result<Vec<ItemResult>>;
}

/// Pushes one chunk of price updates to the marketplace.
#[async_trait]
pub trait PriceUpdater: Send + Sync {
    async fn push_prices(&self, chunk: &[PriceUpdate]) -> Result<Vec<ItemResult>>;
}

#[async_trait]
impl CatalogLister for OzonApi {
    async fn list_offer_ids(&self) -> Result<OfferIdSet> {
        OzonApi::list_offer_ids(self).await
    }
}

#[async_trait]
impl StockUpdater for OzonApi {
    async fn push_stocks(&self, chunk: &[StockUpdate]) -> Result<Vec<ItemResult>> {
        self.update_stocks(chunk).await
    }
}

#[async_trait]
impl PriceUpdater for OzonApi {
    async fn push_prices(&self, chunk: &[PriceUpdate]) -> Result<Vec<ItemResult>> {
        self.update_prices(chunk).await
    }
}

#[async_trait]
impl SupplierFeedFetcher for SupplierFeed {
    async fn fetch(&self) -> Result<Vec<SupplierStockRecord>> {
        self.fetch_records().await
    }
}
