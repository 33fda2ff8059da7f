//! # Menu Catalog Service
//!
//! Pass-through CRUD over a `MenuItemStore`, plus the order counter used by
//! Order Fulfillment.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{InventoryError, InventoryResult, MenuItem, MenuItemId};
use shelf_telemetry::metrics::STORE_ERRORS;
use shelf_telemetry::{log_event, metric_inc};
use tracing::debug;

use crate::domain::{MenuItemDraft, MenuItemMutation};
use crate::ports::{MenuCatalogApi, MenuItemStore};

const SUBSYSTEM: &str = "menu-catalog";

pub struct MenuCatalogService<S: MenuItemStore + ?Sized> {
    store: Arc<S>,
}

impl<S: MenuItemStore + ?Sized> MenuCatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

fn track(op: &'static str) -> impl FnOnce(InventoryError) -> InventoryError {
    move |err| {
        if matches!(
            err,
            InventoryError::StoreUnavailable(_) | InventoryError::Serialization(_)
        ) {
            metric_inc!(STORE_ERRORS, &[SUBSYSTEM, err.kind_label()]);
            log_event!(error, SUBSYSTEM, "Store call failed", op = op, error = %err);
        }
        err
    }
}

#[async_trait]
impl<S: MenuItemStore + ?Sized> MenuCatalogApi for MenuCatalogService<S> {
    async fn create_menu_item(&self, draft: MenuItemDraft) -> InventoryResult<MenuItem> {
        let item = draft.validate()?.into_item(MenuItemId::generate());
        self.store.insert(item.clone()).await.map_err(track("insert"))?;

        log_event!(info, SUBSYSTEM, "Menu item created", id = %item.id, name = %item.name);
        Ok(item)
    }

    async fn import_menu_item(&self, item: MenuItem) -> InventoryResult<MenuItem> {
        self.store.insert(item.clone()).await.map_err(track("insert"))?;
        debug!(id = %item.id, "Menu item imported");
        Ok(item)
    }

    async fn get_menu_item(&self, id: &MenuItemId) -> InventoryResult<MenuItem> {
        self.find_menu_item(id)
            .await?
            .ok_or_else(|| InventoryError::menu_item_not_found(id.as_str()))
    }

    async fn find_menu_item(&self, id: &MenuItemId) -> InventoryResult<Option<MenuItem>> {
        self.store.get(id).await.map_err(track("get"))
    }

    async fn list_menu_items(&self) -> InventoryResult<Vec<MenuItem>> {
        self.store.list().await.map_err(track("list"))
    }

    async fn update_menu_item(
        &self,
        id: &MenuItemId,
        draft: MenuItemDraft,
    ) -> InventoryResult<MenuItem> {
        let fields = draft.validate()?;
        let updated = self
            .store
            .update(id, &MenuItemMutation::Replace(fields))
            .await
            .map_err(track("update"))?;

        log_event!(info, SUBSYSTEM, "Menu item updated", id = %id);
        Ok(updated)
    }

    async fn delete_menu_item(&self, id: &MenuItemId) -> InventoryResult<bool> {
        self.store.delete(id).await.map_err(track("delete"))
    }

    async fn record_orders(&self, id: &MenuItemId, count: u64) -> InventoryResult<MenuItem> {
        self.store
            .update(id, &MenuItemMutation::RecordOrders(count))
            .await
            .map_err(track("update"))
    }
}
