//! Outbound Ports (Driven Ports)
//!
//! Dependencies the Ingredient Ledger requires the host to provide.
//!
//! Production: `RocksDbIngredientStore` (inventory-runtime/adapters/storage)
//! Testing: `InMemoryIngredientStore` (adapters/memory.rs)

use async_trait::async_trait;
use chrono::NaiveDate;
use shared_types::{Ingredient, InventoryResult, Sku};

use crate::domain::IngredientMutation;

/// Persistent set of ingredient records keyed by SKU.
///
/// ## Atomicity
///
/// `insert` is an atomic check-and-insert and `update` applies the mutation
/// to the current record under the store's write lock. Nothing else is
/// guaranteed across calls.
#[async_trait]
pub trait IngredientStore: Send + Sync {
    /// Cheap reachability probe used at startup and by `/health`.
    async fn ping(&self) -> InventoryResult<()>;

    /// Fails with `DuplicateKey` when the SKU is taken.
    async fn insert(&self, record: Ingredient) -> InventoryResult<()>;

    async fn get(&self, sku: &Sku) -> InventoryResult<Option<Ingredient>>;

    /// Every record whose `name` equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> InventoryResult<Vec<Ingredient>>;

    async fn list(&self) -> InventoryResult<Vec<Ingredient>>;

    /// Read-modify-write of one record. Returns the record as stored.
    ///
    /// Fails with `NotFound` when the SKU is absent.
    async fn update(&self, sku: &Sku, mutation: &IngredientMutation)
        -> InventoryResult<Ingredient>;

    /// Returns whether a record was removed.
    async fn delete(&self, sku: &Sku) -> InventoryResult<bool>;

    async fn count(&self) -> InventoryResult<usize>;

    /// Drops every record.
    async fn clear(&self) -> InventoryResult<()>;
}

/// Source of the current business date (for testability).
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
