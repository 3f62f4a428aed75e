//! Price normalization and price update construction.

use log::{debug, warn};

use crate::error::{Result, SyncError};
use crate::models::{OfferIdSet, PriceUpdate, SupplierStockRecord};

/// Converts a supplier price into the digits-only form Ozon accepts.
///
/// Everything from the first `.` on is dropped, then every character that is
/// not an ASCII digit is removed.
///
/// # Examples
/// - "5'990.00 руб." -> "5990"
/// - "19'990.00 руб." -> "19990"
/// - "750" -> "750"
pub fn normalize_price(raw: &str) -> Result<String> {
    let integer_part = raw.split('.').next().unwrap_or_default();
    let digits: String = integer_part
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        warn!("Price '{raw}' contains no digits");
        return Err(SyncError::InvalidFormat(format!(
            "price '{raw}' contains no digits"
        )));
    }

    Ok(digits)
}

/// Builds price updates for every feed record listed in the catalog.
///
/// Offers missing from the feed get no update. `offer_ids` is only checked
/// for membership, so a code repeated in the feed yields one update per row.
pub fn reconcile_prices(
    records: &[SupplierStockRecord],
    offer_ids: &OfferIdSet,
) -> Result<Vec<PriceUpdate>> {
    let mut prices = Vec::new();

    for record in records {
        if !offer_ids.contains(&record.code) {
            continue;
        }
        let price = normalize_price(&record.price).map_err(|e| {
            warn!("Invalid price for offer {}: {e}", record.code);
            e
        })?;
        debug!("Price for {}: '{}' -> {price}", record.code, record.price);
        prices.push(PriceUpdate::rub(&record.code, price));
    }

    debug!(
        "Built {} price updates from {} feed records",
        prices.len(),
        records.len()
    );
    Ok(prices)
}

#[cfg(test)]
#[path = "price_tests.rs"]
mod tests;
