//! Data types shared between the supplier feed, the reconcilers and the Ozon client.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the supplier stock export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierStockRecord {
    /// Supplier article code, matches the Ozon offer ID
    pub code: String,
    /// `">10"`, `"1"` or a plain number
    pub quantity: String,
    /// Formatted price, e.g. `"19'990.00 руб."`
    pub price: String,
    /// Product name, only used for logging
    pub name: Option<String>,
}

impl SupplierStockRecord {
    pub fn new(code: &str, quantity: &str, price: &str) -> Self {
        Self {
            code: code.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
            name: None,
        }
    }
}

/// Offer IDs known to the marketplace catalog, in the order they were listed.
///
/// Duplicates are collapsed on insert. Cloning gives an independent working
/// copy that can be drained without touching the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferIdSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl OfferIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an offer ID, returns `false` if it was already present.
    pub fn insert(&mut self, offer_id: impl Into<String>) -> bool {
        let offer_id = offer_id.into();
        if self.members.contains(&offer_id) {
            return false;
        }
        self.members.insert(offer_id.clone());
        self.order.push(offer_id);
        true
    }

    pub fn contains(&self, offer_id: &str) -> bool {
        self.members.contains(offer_id)
    }

    /// Remove an offer ID, returns `true` if it was present.
    pub fn remove(&mut self, offer_id: &str) -> bool {
        if !self.members.remove(offer_id) {
            return false;
        }
        self.order.retain(|id| id != offer_id);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for OfferIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OfferIdSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Stock update item for `/v1/product/import/stocks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub offer_id: String,
    pub stock: u64,
}

/// Price update item for `/v1/product/import/prices`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub auto_action_enabled: String,
    pub currency_code: String,
    pub offer_id: String,
    pub old_price: String,
    pub price: String,
}

impl PriceUpdate {
    /// Build a RUB price update with no old price and auto actions left untouched.
    pub fn rub(offer_id: &str, price: String) -> Self {
        Self {
            auto_action_enabled: "UNKNOWN".to_string(),
            currency_code: "RUB".to_string(),
            offer_id: offer_id.to_string(),
            old_price: "0".to_string(),
            price,
        }
    }
}

/// Per-item outcome reported by the marketplace for an update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub offer_id: String,
    pub updated: bool,
    pub errors: Vec<String>,
}
