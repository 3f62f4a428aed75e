//! The sync run itself.

use futures::stream::{self, StreamExt};
use log::{debug, info};

use crate::batch;
use crate::config::BatchLimits;
use crate::error::Result;
use crate::models::{PriceUpdate, StockUpdate};
use crate::reconcile::{reconcile_prices, reconcile_stocks};

use super::{
    CatalogLister, PriceUpdater, StockUpdater, SupplierFeedFetcher, SyncReport, UpdateStream,
};

/// Runs one reconciliation of the supplier feed against the catalog and
/// pushes the resulting stocks and prices in chunks.
pub struct SyncOrchestrator<'a> {
    catalog: &'a dyn CatalogLister,
    feed: &'a dyn SupplierFeedFetcher,
    stock_updater: &'a dyn StockUpdater,
    price_updater: &'a dyn PriceUpdater,
    limits: BatchLimits,
}

impl<'a> SyncOrchestrator<'a> {
    pub fn new(
        catalog: &'a dyn CatalogLister,
        feed: &'a dyn SupplierFeedFetcher,
        stock_updater: &'a dyn StockUpdater,
        price_updater: &'a dyn PriceUpdater,
        limits: BatchLimits,
    ) -> Self {
        Self {
            catalog,
            feed,
            stock_updater,
            price_updater,
            limits,
        }
    }

    /// Executes the run.
    ///
    /// Fetch and reconciliation errors abort the run before anything is
    /// pushed. Once dispatch starts, a failing chunk is recorded in the report
    /// and the remaining chunks are still sent; nothing already sent is
    /// rolled back.
    pub async fn run(&self) -> Result<SyncReport> {
        self.limits.validate()?;

        let offer_ids = self.catalog.list_offer_ids().await?;
        let records = self.feed.fetch().await?;
        info!(
            "Reconciling {} supplier records against {} offers",
            records.len(),
            offer_ids.len()
        );

        let stocks = reconcile_stocks(&records, &offer_ids)?;
        let prices = reconcile_prices(&records, &offer_ids)?;

        let mut report = SyncReport {
            offers: offer_ids.len(),
            feed_records: records.len(),
            stocks_total: stocks.len(),
            in_stock: stocks.iter().filter(|s| s.stock > 0).count(),
            prices_total: prices.len(),
            ..SyncReport::default()
        };

        self.push_stocks(&stocks, &mut report).await?;
        self.push_prices(&prices, &mut report).await?;

        info!(
            "Sync finished: {} stocks and {} prices pushed, {} chunks failed",
            report.stocks_pushed,
            report.prices_pushed,
            report.failures.len()
        );
        Ok(report)
    }

    async fn push_stocks(&self, stocks: &[StockUpdate], report: &mut SyncReport) -> Result<()> {
        let chunks = batch::split(stocks, self.limits.stock_chunk_size)?;
        let updater = self.stock_updater;
        info!(
            "Pushing {} stock updates in {} chunks",
            stocks.len(),
            chunks.len()
        );

        let mut outcomes: Vec<_> = stream::iter(chunks.enumerate().map(|(index, chunk)| async move {
            debug!("Sending stock chunk {index} ({} items)", chunk.len());
            (index, chunk.len(), updater.push_stocks(chunk).await)
        }))
        .buffer_unordered(self.limits.max_concurrent_requests)
        .collect()
        .await;

        outcomes.sort_by_key(|(index, _, _)| *index);
        for (index, items, outcome) in outcomes {
            report.record_chunk(UpdateStream::Stocks, index, items, outcome);
        }
        Ok(())
    }

    async fn push_prices(&self, prices: &[PriceUpdate], report: &mut SyncReport) -> Result<()> {
        let chunks = batch::split(prices, self.limits.price_chunk_size)?;
        let updater = self.price_updater;
        info!(
            "Pushing {} price updates in {} chunks",
            prices.len(),
            chunks.len()
        );

        let mut outcomes: Vec<_> = stream::iter(chunks.enumerate().map(|(index, chunk)| async move {
            debug!("Sending price chunk {index} ({} items)", chunk.len());
            (index, chunk.len(), updater.push_prices(chunk).await)
        }))
        .buffer_unordered(self.limits.max_concurrent_requests)
        .collect()
        .await;

        outcomes.sort_by_key(|(index, _, _)| *index);
        for (index, items, outcome) in outcomes {
            report.record_chunk(UpdateStream::Prices, index, items, outcome);
        }
        Ok(())
    }
}
