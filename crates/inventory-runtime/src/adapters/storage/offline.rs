//! Store that answers every call with `StoreUnavailable`.
//!
//! Installed when the configured backend cannot be opened, so the gateway
//! still starts and reports the outage through `/health` and 503 responses.

use async_trait::async_trait;
use shared_types::{Ingredient, InventoryError, InventoryResult, MenuItem, MenuItemId, Sku};
use sl_01_ingredient_ledger::{IngredientMutation, IngredientStore};
use sl_02_menu_catalog::{MenuItemMutation, MenuItemStore};

#[derive(Debug, Clone)]
pub struct OfflineStore {
    reason: String,
}

impl OfflineStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    fn unavailable<T>(&self) -> InventoryResult<T> {
        Err(InventoryError::StoreUnavailable(self.reason.clone()))
    }
}

#[async_trait]
impl IngredientStore for OfflineStore {
    async fn ping(&self) -> InventoryResult<()> {
        self.unavailable()
    }

    async fn insert(&self, _record: Ingredient) -> InventoryResult<()> {
        self.unavailable()
    }

    async fn get(&self, _sku: &Sku) -> InventoryResult<Option<Ingredient>> {
        self.unavailable()
    }

    async fn find_by_name(&self, _name: &str) -> InventoryResult<Vec<Ingredient>> {
        self.unavailable()
    }

    async fn list(&self) -> InventoryResult<Vec<Ingredient>> {
        self.unavailable()
    }

    async fn update(
        &self,
        _sku: &Sku,
        _mutation: &IngredientMutation,
    ) -> InventoryResult<Ingredient> {
        self.unavailable()
    }

    async fn delete(&self, _sku: &Sku) -> InventoryResult<bool> {
        self.unavailable()
    }

    async fn count(&self) -> InventoryResult<usize> {
        self.unavailable()
    }

    async fn clear(&self) -> InventoryResult<()> {
        self.unavailable()
    }
}

#[async_trait]
impl MenuItemStore for OfflineStore {
    async fn ping(&self) -> InventoryResult<()> {
        self.unavailable()
    }

    async fn insert(&self, _item: MenuItem) -> InventoryResult<()> {
        self.unavailable()
    }

    async fn get(&self, _id: &MenuItemId) -> InventoryResult<Option<MenuItem>> {
        self.unavailable()
    }

    async fn list(&self) -> InventoryResult<Vec<MenuItem>> {
        self.unavailable()
    }

    async fn update(
        &self,
        _id: &MenuItemId,
        _mutation: &MenuItemMutation,
    ) -> InventoryResult<MenuItem> {
        self.unavailable()
    }

    async fn delete(&self, _id: &MenuItemId) -> InventoryResult<bool> {
        self.unavailable()
    }

    async fn count(&self) -> InventoryResult<usize> {
        self.unavailable()
    }

    async fn clear(&self) -> InventoryResult<()> {
        self.unavailable()
    }
}
