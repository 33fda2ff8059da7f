//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::{InventoryResult, MenuItem, MenuItemId};

use crate::domain::MenuItemDraft;

/// Primary Menu Catalog API (Driving Port)
#[async_trait]
pub trait MenuCatalogApi: Send + Sync {
    /// Stores a new item under a freshly generated id with `orders = 0`.
    async fn create_menu_item(&self, draft: MenuItemDraft) -> InventoryResult<MenuItem>;

    /// Stores an item under a caller-chosen id (seed import).
    ///
    /// Fails with `DuplicateKey` when the id is taken.
    async fn import_menu_item(&self, item: MenuItem) -> InventoryResult<MenuItem>;

    async fn get_menu_item(&self, id: &MenuItemId) -> InventoryResult<MenuItem>;

    /// Returns `None` instead of `NotFound` for a missing id.
    async fn find_menu_item(&self, id: &MenuItemId) -> InventoryResult<Option<MenuItem>>;

    async fn list_menu_items(&self) -> InventoryResult<Vec<MenuItem>>;

    /// Replaces the caller-owned fields; `orders` is kept.
    async fn update_menu_item(
        &self,
        id: &MenuItemId,
        draft: MenuItemDraft,
    ) -> InventoryResult<MenuItem>;

    /// Idempotent. Returns whether the item existed.
    async fn delete_menu_item(&self, id: &MenuItemId) -> InventoryResult<bool>;

    /// Adds `count` to the item's `orders` counter.
    async fn record_orders(&self, id: &MenuItemId, count: u64) -> InventoryResult<MenuItem>;
}
