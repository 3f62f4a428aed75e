//! Ozon Stock Sync
//!
//! Pushes the supplier's current stock and prices to an Ozon seller account.
//! Runs once and exits; schedule it with cron or a systemd timer.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ozon_stock_sync::config::{
    BatchLimits, DEFAULT_PRICE_CHUNK_SIZE, DEFAULT_STOCK_CHUNK_SIZE, DEFAULT_TIMEOUT_SECS,
};
use ozon_stock_sync::ozon::DEFAULT_BASE_URL;
use ozon_stock_sync::supplier::DEFAULT_FEED_URL;
use ozon_stock_sync::sync::{PriceUpdater, StockUpdater};
use ozon_stock_sync::{
    FailureKind, OzonApi, SimulatedUpdater, SupplierFeed, SyncConfig, SyncOrchestrator,
};

/// Sync supplier stock and prices to Ozon
#[derive(Parser, Debug)]
#[command(name = "ozon_stock_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// Ozon seller client ID
    #[arg(long, env = "CLIENT_ID")]
    client_id: String,

    /// Ozon seller API key
    #[arg(long, env = "SELLER_TOKEN", hide_env_values = true)]
    seller_token: String,

    /// URL of the zipped supplier stock list
    #[arg(long, env = "SUPPLIER_FEED_URL", default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Ozon Seller API host
    #[arg(long, env = "OZON_API_URL", default_value = DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Stock updates per request
    #[arg(long, env = "STOCK_CHUNK_SIZE", default_value_t = DEFAULT_STOCK_CHUNK_SIZE)]
    stock_chunk_size: usize,

    /// Price updates per request
    #[arg(long, env = "PRICE_CHUNK_SIZE", default_value_t = DEFAULT_PRICE_CHUNK_SIZE)]
    price_chunk_size: usize,

    /// Per-request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Chunk requests sent in parallel
    #[arg(long, default_value_t = 1)]
    max_concurrent_requests: usize,

    /// Reconcile and log the updates without pushing them
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

impl Args {
    fn into_config(self) -> SyncConfig {
        SyncConfig {
            client_id: self.client_id,
            seller_token: self.seller_token,
            feed_url: self.feed_url,
            api_base_url: self.api_base_url,
            timeout: Duration::from_secs(self.timeout_secs),
            limits: BatchLimits {
                stock_chunk_size: self.stock_chunk_size,
                price_chunk_size: self.price_chunk_size,
                max_concurrent_requests: self.max_concurrent_requests,
            },
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env may carry RUST_LOG, so load it before the logger
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if dotenv_loaded {
        log::debug!("Loaded environment from .env");
    }

    let config = Args::parse().into_config();

    let (api, feed) = match build_clients(&config) {
        Ok(clients) => clients,
        Err(e) => {
            log::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let simulated = SimulatedUpdater;
    if config.dry_run {
        log::info!("Dry run: updates will be logged, not pushed");
    }
    let stock_updater: &dyn StockUpdater = if config.dry_run { &simulated } else { &api };
    let price_updater: &dyn PriceUpdater = if config.dry_run { &simulated } else { &api };

    log::info!("Starting Ozon stock sync...");
    let orchestrator =
        SyncOrchestrator::new(&api, &feed, stock_updater, price_updater, config.limits);

    match orchestrator.run().await {
        Ok(report) => {
            report.log_summary();
            if report.is_success() {
                log::info!("Sync completed successfully.");
                ExitCode::SUCCESS
            } else {
                log::error!("Sync completed with {} failed chunks", report.failures.len());
                ExitCode::from(2)
            }
        }
        Err(e) => {
            match e.kind() {
                FailureKind::Timeout => log::error!("Request timed out: {e}"),
                FailureKind::Connection => log::error!("Connection error: {e}"),
                FailureKind::Other => log::error!("Sync failed: {e}"),
            }
            ExitCode::from(1)
        }
    }
}

fn build_clients(config: &SyncConfig) -> anyhow::Result<(OzonApi, SupplierFeed)> {
    config.validate().context("Invalid configuration")?;

    let api = OzonApi::new(
        config.client_id.clone(),
        config.seller_token.clone(),
        config.timeout,
    )
    .context("Failed to create Ozon API client")?
    .with_base_url(config.api_base_url.as_str());

    let feed = SupplierFeed::new(config.feed_url.as_str(), config.timeout)
        .context("Failed to create supplier feed client")?;

    Ok((api, feed))
}
