//! Dry-run stand-in for the marketplace updaters.

use async_trait::async_trait;
use log::{debug, info};

use crate::error::Result;
use crate::models::{ItemResult, PriceUpdate, StockUpdate};

use super::{PriceUpdater, StockUpdater};

/// Logs the updates it is given and reports every item as updated.
///
/// Lets a run be checked against the live catalog and feed without changing
/// anything on the marketplace.
#[derive(Debug, Default)]
pub struct SimulatedUpdater;

fn all_updated<'a>(offer_ids: impl Iterator<Item = &'a str>) -> Vec<ItemResult> {
    offer_ids
        .map(|offer_id| ItemResult {
            offer_id: offer_id.to_string(),
            updated: true,
            errors: Vec::new(),
        })
        .collect()
}

#[async_trait]
impl StockUpdater for SimulatedUpdater {
    async fn push_stocks(&self, chunk: &[StockUpdate]) -> Result<Vec<ItemResult>> {
        info!("[dry run] Would upload {} stock updates", chunk.len());
        for stock in chunk {
            debug!("[dry run] stock {} -> {}", stock.offer_id, stock.stock);
        }
        Ok(all_updated(chunk.iter().map(|s| s.offer_id.as_str())))
    }
}

#[async_trait]
impl PriceUpdater for SimulatedUpdater {
    async fn push_prices(&self, chunk: &[PriceUpdate]) -> Result<Vec<ItemResult>> {
        info!("[dry run] Would upload {} price updates", chunk.len());
        for price in chunk {
            debug!("[dry run] price {} -> {} RUB", price.offer_id, price.price);
        }
        Ok(all_updated(chunk.iter().map(|p| p.offer_id.as_str())))
    }
}
