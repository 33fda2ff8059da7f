//! `HealthProbe` backed by fresh store pings.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::ServiceStatus;
use sl_01_ingredient_ledger::IngredientStore;
use sl_02_menu_catalog::MenuItemStore;
use sl_04_api_gateway::{HealthProbe, HealthReport};
use tracing::warn;

pub struct StoreHealthProbe {
    ingredients: Arc<dyn IngredientStore>,
    menu_items: Arc<dyn MenuItemStore>,
    status: RwLock<ServiceStatus>,
}

impl StoreHealthProbe {
    pub fn new(ingredients: Arc<dyn IngredientStore>, menu_items: Arc<dyn MenuItemStore>) -> Self {
        Self {
            ingredients,
            menu_items,
            status: RwLock::new(ServiceStatus::Running),
        }
    }

    /// Status decided at startup.
    pub fn status(&self) -> ServiceStatus {
        *self.status.read()
    }

    pub fn set_status(&self, status: ServiceStatus) {
        *self.status.write() = status;
    }

    /// Pings both record sets.
    pub async fn ping(&self) -> Result<(), shared_types::InventoryError> {
        self.ingredients.ping().await?;
        self.menu_items.ping().await
    }
}

#[async_trait]
impl HealthProbe for StoreHealthProbe {
    async fn check(&self) -> HealthReport {
        let store_reachable = match self.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Health check: store unreachable");
                false
            }
        };
        let status = if store_reachable {
            self.status()
        } else {
            ServiceStatus::Degraded
        };
        HealthReport {
            status,
            store_reachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::OfflineStore;
    use sl_01_ingredient_ledger::InMemoryIngredientStore;
    use sl_02_menu_catalog::InMemoryMenuItemStore;

    #[tokio::test]
    async fn test_reachable_store_reports_startup_status() {
        let probe = StoreHealthProbe::new(
            Arc::new(InMemoryIngredientStore::new()),
            Arc::new(InMemoryMenuItemStore::new()),
        );
        let report = probe.check().await;
        assert!(report.store_reachable);
        assert_eq!(report.status, ServiceStatus::Running);

        probe.set_status(ServiceStatus::Degraded);
        assert_eq!(probe.check().await.status, ServiceStatus::Degraded);
    }

    #[tokio::test]
    async fn test_offline_store_is_degraded() {
        let offline = Arc::new(OfflineStore::new("gone"));
        let probe = StoreHealthProbe::new(offline.clone(), offline);
        let report = probe.check().await;
        assert!(!report.store_reachable);
        assert_eq!(report.status, ServiceStatus::Degraded);
    }
}
