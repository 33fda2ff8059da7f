//! # Service Container
//!
//! Opens the stores and builds every subsystem service on top of them.
//!
//! ## Thread Safety
//!
//! - Stores and services are shared through `Arc`
//! - Each store serialises its own read-modify-write steps
//! - No other shared mutable state

use std::sync::Arc;

use shared_types::ServiceStatus;
use sl_01_ingredient_ledger::{
    Clock, InMemoryIngredientStore, IngredientLedgerApi, IngredientLedgerService,
    IngredientStore, SystemClock,
};
use sl_02_menu_catalog::{InMemoryMenuItemStore, MenuCatalogApi, MenuCatalogService, MenuItemStore};
use sl_03_order_fulfillment::{OrderFulfillmentApi, OrderFulfillmentService};
use sl_04_api_gateway::AppState;
use tracing::{info, instrument, warn};

use crate::adapters::{LedgerStockAdapter, MenuRecipeAdapter, OfflineStore, StoreHealthProbe};
use crate::container::config::{RuntimeConfig, StoreBackend};

/// Central container holding the stores and subsystem services.
pub struct ServiceContainer {
    /// Runtime configuration (immutable after initialization).
    pub config: RuntimeConfig,

    // =========================================================================
    // STORES
    // =========================================================================
    pub ingredient_store: Arc<dyn IngredientStore>,
    pub menu_store: Arc<dyn MenuItemStore>,

    // =========================================================================
    // SUBSYSTEMS
    // =========================================================================
    /// Ingredient Ledger (Subsystem 1)
    pub ledger: Arc<dyn IngredientLedgerApi>,
    /// Menu Catalog (Subsystem 2)
    pub menu: Arc<dyn MenuCatalogApi>,
    /// Order Fulfillment (Subsystem 3), bridged onto 1 and 2
    pub orders: Arc<dyn OrderFulfillmentApi>,

    /// Store liveness for `/health`.
    pub health: Arc<StoreHealthProbe>,
}

impl ServiceContainer {
    /// Opens the configured stores and builds every service.
    ///
    /// A backend that fails to open is replaced by an `OfflineStore`; the
    /// failure surfaces through the startup ping.
    #[instrument(name = "container_init", skip(config))]
    pub fn new(config: RuntimeConfig) -> Self {
        let (ingredients, menu_items) = open_stores(&config);
        Self::with_stores(config, ingredients, menu_items, Arc::new(SystemClock))
    }

    /// Builds the services over caller-provided stores and clock.
    pub fn with_stores<C>(
        config: RuntimeConfig,
        ingredient_store: Arc<dyn IngredientStore>,
        menu_store: Arc<dyn MenuItemStore>,
        clock: Arc<C>,
    ) -> Self
    where
        C: Clock + 'static,
    {
        let ledger: Arc<dyn IngredientLedgerApi> = Arc::new(IngredientLedgerService::with_clock(
            Arc::clone(&ingredient_store),
            clock,
            config.ledger_config(),
        ));
        info!("  [1] Ingredient Ledger initialized");

        let menu: Arc<dyn MenuCatalogApi> =
            Arc::new(MenuCatalogService::new(Arc::clone(&menu_store)));
        info!("  [2] Menu Catalog initialized");

        let orders: Arc<dyn OrderFulfillmentApi> = Arc::new(OrderFulfillmentService::new(
            Arc::new(MenuRecipeAdapter::new(Arc::clone(&menu))),
            Arc::new(LedgerStockAdapter::new(Arc::clone(&ledger))),
        ));
        info!("  [3] Order Fulfillment initialized");

        let health = Arc::new(StoreHealthProbe::new(
            Arc::clone(&ingredient_store),
            Arc::clone(&menu_store),
        ));

        Self {
            config,
            ingredient_store,
            menu_store,
            ledger,
            menu,
            orders,
            health,
        }
    }

    /// Handler state for the API Gateway.
    pub fn app_state(&self) -> AppState {
        AppState {
            ledger: Arc::clone(&self.ledger),
            menu: Arc::clone(&self.menu),
            orders: Arc::clone(&self.orders),
            health: self.health.clone(),
        }
    }

    pub fn status(&self) -> ServiceStatus {
        self.health.status()
    }
}

fn open_stores(config: &RuntimeConfig) -> (Arc<dyn IngredientStore>, Arc<dyn MenuItemStore>) {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory stores");
            let ingredients: Arc<dyn IngredientStore> = Arc::new(InMemoryIngredientStore::new());
            let menu_items: Arc<dyn MenuItemStore> = Arc::new(InMemoryMenuItemStore::new());
            (ingredients, menu_items)
        }
        StoreBackend::RocksDb => open_rocksdb(config),
    }
}

#[cfg(feature = "rocksdb")]
fn open_rocksdb(config: &RuntimeConfig) -> (Arc<dyn IngredientStore>, Arc<dyn MenuItemStore>) {
    use crate::adapters::storage::{
        RocksDbConfig, RocksDbIngredientStore, RocksDbMenuItemStore, RocksDbStore,
    };

    match RocksDbStore::open(RocksDbConfig::at(&config.store.path)) {
        Ok(db) => {
            info!(path = %config.store.path.display(), "Opened RocksDB stores");
            let db = Arc::new(db);
            let ingredients: Arc<dyn IngredientStore> =
                Arc::new(RocksDbIngredientStore::new(Arc::clone(&db)));
            let menu_items: Arc<dyn MenuItemStore> = Arc::new(RocksDbMenuItemStore::new(db));
            (ingredients, menu_items)
        }
        Err(e) => {
            warn!(error = %e, "RocksDB unavailable; installing offline store");
            offline(e.to_string())
        }
    }
}

#[cfg(not(feature = "rocksdb"))]
fn open_rocksdb(_config: &RuntimeConfig) -> (Arc<dyn IngredientStore>, Arc<dyn MenuItemStore>) {
    warn!("Built without the `rocksdb` feature; installing offline store");
    offline("rocksdb backend not compiled in".to_string())
}

fn offline(reason: String) -> (Arc<dyn IngredientStore>, Arc<dyn MenuItemStore>) {
    let store = Arc::new(OfflineStore::new(reason));
    let ingredients: Arc<dyn IngredientStore> = store.clone();
    let menu_items: Arc<dyn MenuItemStore> = store;
    (ingredients, menu_items)
}
