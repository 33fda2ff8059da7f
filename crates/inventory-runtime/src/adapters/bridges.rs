//! # Order Fulfillment Bridges
//!
//! Order Fulfillment never touches a store directly. These adapters
//! implement its outbound ports on top of the other subsystems' inbound APIs,
//! so every write still goes through the owning service.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{Ingredient, InventoryResult, MenuItem, MenuItemId};
use sl_01_ingredient_ledger::IngredientLedgerApi;
use sl_02_menu_catalog::MenuCatalogApi;
use sl_03_order_fulfillment::{RecipeCatalog, StockLedger};

/// `RecipeCatalog` over the Menu Catalog.
pub struct MenuRecipeAdapter {
    menu: Arc<dyn MenuCatalogApi>,
}

impl MenuRecipeAdapter {
    pub fn new(menu: Arc<dyn MenuCatalogApi>) -> Self {
        Self { menu }
    }
}

#[async_trait]
impl RecipeCatalog for MenuRecipeAdapter {
    async fn find_recipe(&self, id: &MenuItemId) -> InventoryResult<Option<MenuItem>> {
        self.menu.find_menu_item(id).await
    }

    async fn record_orders(&self, id: &MenuItemId, count: u64) -> InventoryResult<()> {
        self.menu.record_orders(id, count).await.map(|_| ())
    }
}

/// `StockLedger` over the Ingredient Ledger.
pub struct LedgerStockAdapter {
    ledger: Arc<dyn IngredientLedgerApi>,
}

impl LedgerStockAdapter {
    pub fn new(ledger: Arc<dyn IngredientLedgerApi>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl StockLedger for LedgerStockAdapter {
    async fn consume_by_name(
        &self,
        name: &str,
        units: u64,
    ) -> InventoryResult<Option<Ingredient>> {
        self.ledger.consume_by_name(name, units).await
    }
}
