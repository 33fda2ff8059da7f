//! Outbound Ports (Driven Ports)
//!
//! Production: bridges over the Menu Catalog and Ingredient Ledger services
//! (inventory-runtime/adapters)

use async_trait::async_trait;
use shared_types::{Ingredient, InventoryResult, MenuItem, MenuItemId};

/// Read access to recipes plus the best-seller counter.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// `None` when the recipe does not exist.
    async fn find_recipe(&self, id: &MenuItemId) -> InventoryResult<Option<MenuItem>>;

    /// Adds `count` to the recipe's `orders` counter.
    async fn record_orders(&self, id: &MenuItemId, count: u64) -> InventoryResult<()>;
}

/// Stock decrements against the ledger, addressed by ingredient name.
#[async_trait]
pub trait StockLedger: Send + Sync {
    /// Removes `units` (clamped at zero) in one atomic write.
    ///
    /// `None` when no record has this name.
    async fn consume_by_name(&self, name: &str, units: u64)
        -> InventoryResult<Option<Ingredient>>;
}
