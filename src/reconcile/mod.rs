//! Reconciliation of the supplier feed against the Ozon catalog.
//!
//! # Module Structure
//!
//! - [`stock`] - Stock updates with quantity buckets and zero-fill for unlisted offers
//! - [`price`] - Price normalization and price updates for matched offers

pub mod price;
pub mod stock;

pub use price::{normalize_price, reconcile_prices};
pub use stock::{reconcile_stocks, stock_from_quantity};
