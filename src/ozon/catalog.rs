//! Catalog listing via `/v2/product/list`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::OfferIdSet;

use super::OzonApi;

/// Page size requested from the product list endpoint (API maximum)
const PAGE_LIMIT: u32 = 1000;

#[derive(Debug, Serialize)]
struct ProductListRequest<'a> {
    filter: ProductListFilter,
    last_id: &'a str,
    limit: u32,
}

#[derive(Debug, Serialize)]
struct ProductListFilter {
    visibility: &'static str,
}

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    result: ProductListPage,
}

/// One page of the seller's product list
#[derive(Debug, Deserialize, Clone)]
pub struct ProductListPage {
    #[serde(default)]
    pub items: Vec<ProductListItem>,
    pub total: usize,
    #[serde(default)]
    pub last_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProductListItem {
    #[serde(default)]
    pub product_id: u64,
    pub offer_id: String,
}

impl OzonApi {
    /// Fetches one page of the product list, starting after `last_id`.
    pub async fn get_product_list(&self, last_id: &str) -> Result<ProductListPage> {
        let request = ProductListRequest {
            filter: ProductListFilter { visibility: "ALL" },
            last_id,
            limit: PAGE_LIMIT,
        };
        let response: ProductListResponse =
            self.post_json("/v2/product/list", &request).await?;
        Ok(response.result)
    }

    /// Collects the offer IDs of every product in the catalog.
    ///
    /// Pages are requested until the number of collected items reaches the
    /// reported total.
    pub async fn list_offer_ids(&self) -> Result<OfferIdSet> {
        info!("Fetching offer IDs from Ozon...");
        let mut last_id = String::new();
        let mut collected = 0usize;
        let mut offer_ids = OfferIdSet::new();

        loop {
            let page = self.get_product_list(&last_id).await?;
            debug!(
                "Product list page: {} items, total {}, last_id '{}'",
                page.items.len(),
                page.total,
                page.last_id
            );

            if page.items.is_empty() {
                if collected < page.total {
                    warn!(
                        "Product list returned an empty page after {collected} of {} items",
                        page.total
                    );
                }
                break;
            }

            collected += page.items.len();
            for item in page.items {
                if !offer_ids.insert(item.offer_id.clone()) {
                    warn!("Duplicate offer ID in catalog: {}", item.offer_id);
                }
            }

            if collected >= page.total {
                break;
            }
            last_id = page.last_id;
        }

        info!("Fetched {} offer IDs", offer_ids.len());
        Ok(offer_ids)
    }
}
