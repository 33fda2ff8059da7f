//! In-memory `MenuItemStore`.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{InventoryError, InventoryResult, MenuItem, MenuItemId};

use crate::domain::MenuItemMutation;
use crate::ports::MenuItemStore;

#[derive(Debug, Default)]
pub struct InMemoryMenuItemStore {
    items: RwLock<HashMap<MenuItemId, MenuItem>>,
}

impl InMemoryMenuItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: RwLock::new(items.into_iter().map(|i| (i.id.clone(), i)).collect()),
        }
    }
}

#[async_trait]
impl MenuItemStore for InMemoryMenuItemStore {
    async fn ping(&self) -> InventoryResult<()> {
        Ok(())
    }

    async fn insert(&self, item: MenuItem) -> InventoryResult<()> {
        let mut items = self.items.write();
        if items.contains_key(&item.id) {
            return Err(InventoryError::duplicate_menu_item(item.id.as_str()));
        }
        items.insert(item.id.clone(), item);
        Ok(())
    }

    async fn get(&self, id: &MenuItemId) -> InventoryResult<Option<MenuItem>> {
        Ok(self.items.read().get(id).cloned())
    }

    async fn list(&self) -> InventoryResult<Vec<MenuItem>> {
        Ok(self.items.read().values().cloned().collect())
    }

    async fn update(
        &self,
        id: &MenuItemId,
        mutation: &MenuItemMutation,
    ) -> InventoryResult<MenuItem> {
        let mut items = self.items.write();
        let item = items
            .get_mut(id)
            .ok_or_else(|| InventoryError::menu_item_not_found(id.as_str()))?;
        mutation.apply(item);
        Ok(item.clone())
    }

    async fn delete(&self, id: &MenuItemId) -> InventoryResult<bool> {
        Ok(self.items.write().remove(id).is_some())
    }

    async fn count(&self) -> InventoryResult<usize> {
        Ok(self.items.read().len())
    }

    async fn clear(&self) -> InventoryResult<()> {
        self.items.write().clear();
        Ok(())
    }
}
