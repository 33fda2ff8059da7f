//! Outbound Ports (Driven Ports)
//!
//! Production: `RocksDbMenuItemStore` (inventory-runtime/adapters/storage)
//! Testing: `InMemoryMenuItemStore` (adapters/memory.rs)

use async_trait::async_trait;
use shared_types::{InventoryResult, MenuItem, MenuItemId};

use crate::domain::MenuItemMutation;

/// Persistent set of menu items keyed by id.
#[async_trait]
pub trait MenuItemStore: Send + Sync {
    async fn ping(&self) -> InventoryResult<()>;

    /// Fails with `DuplicateKey` when the id is taken.
    async fn insert(&self, item: MenuItem) -> InventoryResult<()>;

    async fn get(&self, id: &MenuItemId) -> InventoryResult<Option<MenuItem>>;

    async fn list(&self) -> InventoryResult<Vec<MenuItem>>;

    /// Read-modify-write of one item. Fails with `NotFound` when absent.
    async fn update(&self, id: &MenuItemId, mutation: &MenuItemMutation)
        -> InventoryResult<MenuItem>;

    async fn delete(&self, id: &MenuItemId) -> InventoryResult<bool>;

    async fn count(&self) -> InventoryResult<usize>;

    async fn clear(&self) -> InventoryResult<()>;
}
