//! Ozon Seller API client.
//!
//! Covers the three endpoints the sync needs: listing the catalog's offer IDs
//! and importing stocks and prices.

mod catalog;
mod updates;

use std::time::Duration;

use log::{debug, error};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, SyncError};

pub use catalog::{ProductListItem, ProductListPage};
pub use updates::{ImportItemError, ImportItemResult};

/// Production Ozon Seller API host
pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru";

/// Ozon Seller API client holding the seller credentials.
pub struct OzonApi {
    pub(crate) client: Client,
    pub(crate) client_id: String,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl OzonApi {
    /// Creates a client for the production API with the given request timeout.
    pub fn new(client_id: String, api_key: String, timeout: Duration) -> Result<Self> {
        log::info!("Creating Ozon API client for seller {client_id}");
        log::debug!("API key length: {}", api_key.len());
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            client_id,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Points the client at another host, e.g. a sandbox.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs a JSON body with the seller headers and decodes the JSON answer.
    pub(crate) async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("Client-Id", &self.client_id)
            .header("Api-Key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status for {endpoint}: {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Ozon request {endpoint} failed with status {status}: {body}");
            return Err(SyncError::http_status(status, body));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
