//! Supplier stock feed: a zipped spreadsheet published on the supplier's site.

mod sheet;

use std::io::{Cursor, Read};
use std::time::Duration;

use calamine::Reader;
use log::{debug, info};
use reqwest::Client;

use crate::error::{Result, SyncError};
use crate::models::SupplierStockRecord;

pub use sheet::{cell_to_string, parse_stock_rows};

/// Where the supplier publishes the current stock list
pub const DEFAULT_FEED_URL: &str = "https://timeworld.ru/upload/files/ostatki.zip";

/// Downloads and parses the supplier stock list.
pub struct SupplierFeed {
    client: Client,
    url: String,
}

impl SupplierFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads the archive and returns every stock row of its spreadsheet.
    pub async fn fetch_records(&self) -> Result<Vec<SupplierStockRecord>> {
        info!("Downloading supplier stock list from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", "ozon_stock_sync/1.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::http_status(status, body));
        }

        let archive = response.bytes().await?;
        debug!("Downloaded {} bytes", archive.len());

        let workbook = extract_workbook(&archive)?;
        let records = parse_workbook(workbook)?;
        info!("Read {} stock records from supplier feed", records.len());
        Ok(records)
    }
}

/// Returns the bytes of the first `.xls`/`.xlsx` entry in a zip archive.
pub fn extract_workbook(archive: &[u8]) -> Result<Vec<u8>> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let name = entry.name().to_lowercase();
        if name.ends_with(".xls") || name.ends_with(".xlsx") {
            debug!("Using archive entry {} ({} bytes)", entry.name(), entry.size());
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            return Ok(data);
        }
        debug!("Skipping archive entry {}", entry.name());
    }

    Err(SyncError::Feed(
        "archive contains no .xls or .xlsx file".to_string(),
    ))
}

/// Parses the first worksheet of an in-memory workbook.
pub fn parse_workbook(data: Vec<u8>) -> Result<Vec<SupplierStockRecord>> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(data))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SyncError::Feed("workbook has no worksheets".to_string()))??;
    parse_stock_rows(&range)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
