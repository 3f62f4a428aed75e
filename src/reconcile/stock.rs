//! Stock update construction.

use log::{debug, info, warn};

use crate::error::{Result, SyncError};
use crate::models::{OfferIdSet, StockUpdate, SupplierStockRecord};

/// Stock reported for the supplier's `">10"` bucket
pub const MANY_IN_STOCK: u64 = 100;

/// Maps a supplier quantity onto the stock pushed to Ozon.
///
/// - `">10"` -> 100
/// - `"1"` -> 0 (a single remaining item is held back)
/// - any other value is parsed as a non-negative integer
pub fn stock_from_quantity(quantity: &str) -> Result<u64> {
    match quantity {
        ">10" => Ok(MANY_IN_STOCK),
        "1" => Ok(0),
        other => other.trim().parse::<u64>().map_err(|e| {
            SyncError::InvalidFormat(format!("quantity '{other}' is not a number: {e}"))
        }),
    }
}

/// Builds one stock update per catalog offer.
///
/// Feed records listed in the catalog come first, in feed order. Every offer
/// the feed did not mention follows with a stock of zero, in catalog order.
/// Matching drains a private copy of `offer_ids`, so each offer is emitted once
/// and the caller's set stays untouched.
pub fn reconcile_stocks(
    records: &[SupplierStockRecord],
    offer_ids: &OfferIdSet,
) -> Result<Vec<StockUpdate>> {
    let mut remaining = offer_ids.clone();
    let mut stocks = Vec::with_capacity(offer_ids.len());

    for record in records {
        if !remaining.contains(&record.code) {
            continue;
        }
        let stock = stock_from_quantity(&record.quantity).map_err(|e| {
            warn!("Invalid quantity for offer {}: {e}", record.code);
            e
        })?;
        debug!(
            "Stock for {}: '{}' -> {stock}",
            record.code, record.quantity
        );
        stocks.push(StockUpdate {
            offer_id: record.code.clone(),
            stock,
        });
        remaining.remove(&record.code);
    }

    let matched = stocks.len();
    for offer_id in remaining.iter() {
        stocks.push(StockUpdate {
            offer_id: offer_id.to_string(),
            stock: 0,
        });
    }

    info!(
        "Built {} stock updates ({} from feed, {} missing from feed set to 0)",
        stocks.len(),
        matched,
        stocks.len() - matched
    );
    Ok(stocks)
}

#[cfg(test)]
#[path = "stock_tests.rs"]
mod tests;
