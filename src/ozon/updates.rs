//! Stock and price imports.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ItemResult, PriceUpdate, StockUpdate};

use super::OzonApi;

#[derive(Debug, Serialize)]
struct StocksRequest<'a> {
    stocks: &'a [StockUpdate],
}

#[derive(Debug, Serialize)]
struct PricesRequest<'a> {
    prices: &'a [PriceUpdate],
}

#[derive(Debug, Deserialize)]
struct ImportResponse {
    #[serde(default)]
    result: Vec<ImportItemResult>,
}

/// Per-offer outcome of a stock or price import
#[derive(Debug, Deserialize, Clone)]
pub struct ImportItemResult {
    #[serde(default)]
    pub product_id: u64,
    pub offer_id: String,
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub errors: Vec<ImportItemError>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImportItemError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl From<ImportItemResult> for ItemResult {
    fn from(item: ImportItemResult) -> Self {
        let errors = item
            .errors
            .into_iter()
            .map(|e| {
                if e.message.is_empty() {
                    e.code
                } else {
                    format!("{}: {}", e.code, e.message)
                }
            })
            .collect();
        ItemResult {
            offer_id: item.offer_id,
            updated: item.updated,
            errors,
        }
    }
}

fn into_item_results(response: ImportResponse, what: &str) -> Vec<ItemResult> {
    let results: Vec<ItemResult> = response.result.into_iter().map(Into::into).collect();
    let rejected = results.iter().filter(|r| !r.updated).count();
    if rejected > 0 {
        warn!("Ozon rejected {rejected} of {} {what} updates", results.len());
    }
    results
}

impl OzonApi {
    /// Pushes one chunk of stock updates.
    pub async fn update_stocks(&self, stocks: &[StockUpdate]) -> Result<Vec<ItemResult>> {
        info!("Uploading {} stock updates", stocks.len());
        let response: ImportResponse = self
            .post_json("/v1/product/import/stocks", &StocksRequest { stocks })
            .await?;
        Ok(into_item_results(response, "stock"))
    }

    /// Pushes one chunk of price updates.
    pub async fn update_prices(&self, prices: &[PriceUpdate]) -> Result<Vec<ItemResult>> {
        info!("Uploading {} price updates", prices.len());
        let response: ImportResponse = self
            .post_json("/v1/product/import/prices", &PricesRequest { prices })
            .await?;
        Ok(into_item_results(response, "price"))
    }
}
