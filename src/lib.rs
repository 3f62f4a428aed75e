//! Ozon Stock Sync - supplier stock and prices to an Ozon seller catalog
//!
//! Downloads the supplier's stock export, reconciles it against the offer IDs
//! listed in the Ozon catalog and pushes stocks and prices in API-sized chunks.

pub mod batch;
pub mod config;
pub mod error;
pub mod models;
pub mod ozon;
pub mod reconcile;
pub mod supplier;
pub mod sync;

pub use config::{BatchLimits, SyncConfig};
pub use error::{FailureKind, Result, SyncError};
pub use models::{ItemResult, OfferIdSet, PriceUpdate, StockUpdate, SupplierStockRecord};
pub use ozon::OzonApi;
pub use supplier::SupplierFeed;
pub use sync::{SimulatedUpdater, SyncOrchestrator, SyncReport};
