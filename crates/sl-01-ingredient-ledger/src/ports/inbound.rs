//! Inbound Ports (Driving Ports)
//!
//! The public API of the Ingredient Ledger.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use shared_types::{Ingredient, InventoryResult, Sku};

use crate::domain::{IngredientDraft, ResupplyEntry, ResupplyReport};

/// Primary Ingredient Ledger API (Driving Port)
#[async_trait]
pub trait IngredientLedgerApi: Send + Sync {
    /// Validates and stores a new record with `orders = 1`.
    ///
    /// ## Errors
    ///
    /// - `Validation`: empty sku/name, malformed date, negative quantities
    /// - `DuplicateKey`: a record with this SKU already exists (nothing is
    ///   mutated)
    async fn create_ingredient(&self, draft: IngredientDraft) -> InventoryResult<Ingredient>;

    /// ## Errors
    ///
    /// - `NotFound`: no record for `sku`
    async fn get_ingredient(&self, sku: &Sku) -> InventoryResult<Ingredient>;

    /// All records, order unspecified.
    async fn list_ingredients(&self) -> InventoryResult<Vec<Ingredient>>;

    /// Full replace of the caller-owned fields of an existing record.
    ///
    /// `draft.sku` is ignored; the addressed `sku` is authoritative.
    /// `orders` is incremented, trends are carried forward.
    async fn update_ingredient(
        &self,
        sku: &Sku,
        draft: IngredientDraft,
    ) -> InventoryResult<Ingredient>;

    /// Removes the record if present. Returns whether it existed.
    async fn delete_ingredient(&self, sku: &Sku) -> InventoryResult<bool>;

    /// Records with `expiry_date < as_of`.
    async fn list_expired(&self, as_of: NaiveDate) -> InventoryResult<Vec<Ingredient>>;

    /// Records with `as_of <= expiry_date <= as_of + horizon`.
    async fn list_expiring_soon(
        &self,
        as_of: NaiveDate,
        horizon: Duration,
    ) -> InventoryResult<Vec<Ingredient>>;

    /// Records with `stock < warning_stock_amount`.
    async fn list_low_stock(&self) -> InventoryResult<Vec<Ingredient>>;

    /// Applies a delivery batch in input order.
    ///
    /// ## Consistency
    ///
    /// Each entry is one atomic step. The first failing entry aborts the
    /// batch and its error is returned; earlier entries stay committed.
    async fn resupply(&self, entries: Vec<ResupplyEntry>) -> InventoryResult<ResupplyReport>;

    /// Removes `units` from the record named `name`, clamping at zero.
    ///
    /// Matching is by exact name. When several records share the name the
    /// one with the lowest SKU is used. Returns `None` when no record
    /// matches.
    async fn consume_by_name(&self, name: &str, units: u64)
        -> InventoryResult<Option<Ingredient>>;

    /// Configured default horizon for the expiring-soon view.
    fn default_horizon(&self) -> Duration;

    /// Current business date.
    fn today(&self) -> NaiveDate;
}
