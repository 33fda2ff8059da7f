//! # Ingredient Ledger Service
//!
//! Implements `IngredientLedgerApi` over an injected `IngredientStore` and
//! `Clock`.
//!
//! ## Architecture
//!
//! 1. Validates caller input in the domain layer before touching the store
//! 2. Expresses every write as one `IngredientMutation` so the store can
//!    apply it atomically
//! 3. Runs resupply batches entry by entry, stopping at the first error

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use shared_types::{Ingredient, InventoryError, InventoryResult, Sku};
use shelf_telemetry::metrics::{INGREDIENTS_CREATED, RESUPPLY_ENTRIES, STORE_ERRORS};
use shelf_telemetry::{log_event, metric_inc};
use tracing::{debug, warn};

use crate::domain::{
    queries, IngredientDraft, IngredientMutation, LedgerConfig, ResupplyAction, ResupplyEntry,
    ResupplyOutcome, ResupplyReport,
};
use crate::ports::{Clock, IngredientLedgerApi, IngredientStore, SystemClock};

const SUBSYSTEM: &str = "ingredient-ledger";

/// The Ingredient Ledger service.
pub struct IngredientLedgerService<S, C = SystemClock>
where
    S: IngredientStore + ?Sized,
    C: Clock,
{
    store: Arc<S>,
    clock: Arc<C>,
    config: LedgerConfig,
}

impl<S> IngredientLedgerService<S, SystemClock>
where
    S: IngredientStore + ?Sized,
{
    /// Service on the local wall clock.
    pub fn new(store: Arc<S>, config: LedgerConfig) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }
}

impl<S, C> IngredientLedgerService<S, C>
where
    S: IngredientStore + ?Sized,
    C: Clock,
{
    pub fn with_clock(store: Arc<S>, clock: Arc<C>, config: LedgerConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    async fn apply_entry(
        &self,
        sku: &Sku,
        entry: &ResupplyEntry,
    ) -> InventoryResult<ResupplyOutcome> {
        if entry.is_new_ingredient {
            let existing = self.store.get(sku).await.map_err(track("get"))?;
            if existing.is_none() {
                let record = entry.to_new_fields()?.into_new_record(sku.clone());
                let outcome = ResupplyOutcome {
                    sku: sku.clone(),
                    action: ResupplyAction::Created,
                    stock: record.stock,
                    orders: record.orders,
                };
                match self.store.insert(record).await {
                    Ok(()) => {
                        metric_inc!(INGREDIENTS_CREATED);
                        return Ok(outcome);
                    }
                    // Lost a race with a concurrent create: restock instead.
                    Err(InventoryError::DuplicateKey { .. }) => {
                        warn!(sku = %sku, "New-ingredient entry raced an existing record; restocking");
                    }
                    Err(e) => return Err(track("insert")(e)),
                }
            } else {
                debug!(sku = %sku, "Entry flagged new but SKU exists; restocking");
            }
        }

        let restock = entry.to_restock()?;
        let updated = self
            .store
            .update(sku, &IngredientMutation::Restock(restock))
            .await
            .map_err(track("update"))?;

        Ok(ResupplyOutcome {
            sku: updated.sku,
            action: ResupplyAction::Restocked,
            stock: updated.stock,
            orders: updated.orders,
        })
    }
}

/// Counts backend faults before handing the error back to the caller.
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
impl<S, C> IngredientLedgerApi for IngredientLedgerService<S, C>
where
    S: IngredientStore + ?Sized,
    C: Clock,
{
    async fn create_ingredient(&self, draft: IngredientDraft) -> InventoryResult<Ingredient> {
        let (sku, fields) = draft.validate()?;
        let record = fields.into_new_record(sku);

        self.store
            .insert(record.clone())
            .await
            .map_err(track("insert"))?;

        metric_inc!(INGREDIENTS_CREATED);
        log_event!(info, SUBSYSTEM, "Ingredient created", sku = %record.sku, stock = record.stock);
        Ok(record)
    }

    async fn get_ingredient(&self, sku: &Sku) -> InventoryResult<Ingredient> {
        self.store
            .get(sku)
            .await
            .map_err(track("get"))?
            .ok_or_else(|| InventoryError::ingredient_not_found(sku.as_str()))
    }

    async fn list_ingredients(&self) -> InventoryResult<Vec<Ingredient>> {
        self.store.list().await.map_err(track("list"))
    }

    async fn update_ingredient(
        &self,
        sku: &Sku,
        draft: IngredientDraft,
    ) -> InventoryResult<Ingredient> {
        let fields = draft.validate_fields()?;
        let updated = self
            .store
            .update(sku, &IngredientMutation::Replace(fields))
            .await
            .map_err(track("update"))?;

        log_event!(info, SUBSYSTEM, "Ingredient updated", sku = %sku, orders = updated.orders);
        Ok(updated)
    }

    async fn delete_ingredient(&self, sku: &Sku) -> InventoryResult<bool> {
        let removed = self.store.delete(sku).await.map_err(track("delete"))?;
        debug!(sku = %sku, removed, "Ingredient delete");
        Ok(removed)
    }

    async fn list_expired(&self, as_of: NaiveDate) -> InventoryResult<Vec<Ingredient>> {
        let records = self.list_ingredients().await?;
        Ok(queries::expired(records, as_of))
    }

    async fn list_expiring_soon(
        &self,
        as_of: NaiveDate,
        horizon: Duration,
    ) -> InventoryResult<Vec<Ingredient>> {
        let records = self.list_ingredients().await?;
        Ok(queries::expiring_soon(records, as_of, horizon))
    }

    async fn list_low_stock(&self) -> InventoryResult<Vec<Ingredient>> {
        let records = self.list_ingredients().await?;
        Ok(queries::low_stock(records))
    }

    async fn resupply(&self, entries: Vec<ResupplyEntry>) -> InventoryResult<ResupplyReport> {
        let total = entries.len();
        let mut report = ResupplyReport::default();

        for (index, entry) in entries.iter().enumerate() {
            let outcome = match entry.sku() {
                Ok(sku) => self.apply_entry(&sku, entry).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(outcome) => {
                    metric_inc!(RESUPPLY_ENTRIES, &[outcome.action.as_str()]);
                    report.outcomes.push(outcome);
                }
                Err(e) => {
                    log_event!(
                        warn,
                        SUBSYSTEM,
                        "Resupply batch stopped",
                        index = index,
                        committed = report.len(),
                        total = total,
                        error = %e
                    );
                    return Err(e);
                }
            }
        }

        log_event!(
            info,
            SUBSYSTEM,
            "Resupply batch applied",
            created = report.created(),
            restocked = report.restocked()
        );
        Ok(report)
    }

    async fn consume_by_name(
        &self,
        name: &str,
        units: u64,
    ) -> InventoryResult<Option<Ingredient>> {
        let matches = self
            .store
            .find_by_name(name)
            .await
            .map_err(track("find_by_name"))?;

        let Some(target) = matches.first() else {
            debug!(ingredient = name, "No ledger record for ingredient name");
            return Ok(None);
        };
        if matches.len() > 1 {
            warn!(
                ingredient = name,
                chosen = %target.sku,
                candidates = matches.len(),
                "Ingredient name is not unique; consuming from first match"
            );
        }

        let updated = self
            .store
            .update(&target.sku, &IngredientMutation::Consume { units })
            .await
            .map_err(track("update"))?;

        debug!(ingredient = name, sku = %updated.sku, units, stock = updated.stock, "Stock consumed");
        Ok(Some(updated))
    }

    fn default_horizon(&self) -> Duration {
        self.config.expiring_soon_horizon()
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryIngredientStore;
    use crate::ports::FixedClock;
    use crate::test_utils::{date, draft, ingredient};
    use shared_types::StockUnit;

    fn service_with(
        records: Vec<Ingredient>,
    ) -> IngredientLedgerService<InMemoryIngredientStore, FixedClock> {
        IngredientLedgerService::with_clock(
            Arc::new(InMemoryIngredientStore::with_records(records)),
            Arc::new(FixedClock(date(2026, 10, 19))),
            LedgerConfig::default(),
        )
    }

    fn restock(sku: &str, stock: i64) -> ResupplyEntry {
        ResupplyEntry {
            sku: sku.to_string(),
            stock,
            ..Default::default()
        }
    }

    /// Store whose backend is gone.
    struct UnreachableStore;

    #[async_trait]
    impl IngredientStore for UnreachableStore {
        async fn ping(&self) -> InventoryResult<()> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn insert(&self, _record: Ingredient) -> InventoryResult<()> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn get(&self, _sku: &Sku) -> InventoryResult<Option<Ingredient>> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn find_by_name(&self, _name: &str) -> InventoryResult<Vec<Ingredient>> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn list(&self) -> InventoryResult<Vec<Ingredient>> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn update(
            &self,
            _sku: &Sku,
            _mutation: &IngredientMutation,
        ) -> InventoryResult<Ingredient> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn delete(&self, _sku: &Sku) -> InventoryResult<bool> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn count(&self) -> InventoryResult<usize> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
        async fn clear(&self) -> InventoryResult<()> {
            Err(InventoryError::StoreUnavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn test_create_then_get_starts_with_one_order() {
        let service = service_with(vec![]);
        service
            .create_ingredient(draft("SKU-1", "Tomato", 10, 5, "2026-11-01"))
            .await
            .unwrap();

        let stored = service.get_ingredient(&Sku::from("SKU-1")).await.unwrap();
        assert_eq!(stored.name, "Tomato");
        assert_eq!(stored.stock, 10);
        assert_eq!(stored.warning_stock_amount, 5);
        assert_eq!(stored.orders, 1);
        assert_eq!(stored.month_increase, "0%");
    }

    #[tokio::test]
    async fn test_duplicate_create_leaves_record_untouched() {
        let service = service_with(vec![]);
        service
            .create_ingredient(draft("SKU-1", "Tomato", 10, 5, "2026-11-01"))
            .await
            .unwrap();

        let err = service
            .create_ingredient(draft("SKU-1", "Imposter", 1, 1, "2027-01-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateKey { .. }));

        let stored = service.get_ingredient(&Sku::from("SKU-1")).await.unwrap();
        assert_eq!(stored.name, "Tomato");
        assert_eq!(stored.stock, 10);
        assert_eq!(stored.orders, 1);
    }

    #[tokio::test]
    async fn test_invalid_create_does_not_touch_store() {
        let service = service_with(vec![]);
        let err = service
            .create_ingredient(draft("SKU-1", "Tomato", -1, 5, "2026-11-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        assert!(service.list_ingredients().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = service_with(vec![]);
        let err = service.get_ingredient(&Sku::from("X")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_bumps_orders() {
        let mut existing = ingredient("SKU-1", "Tomato", 10, 5);
        existing.orders = 3;
        existing.year_increase = "7%".into();
        let service = service_with(vec![existing]);

        let mut body = draft("IGNORED", "Roma Tomato", 4, 2, "2026-12-01");
        body.unit = "kgs".into();
        let updated = service
            .update_ingredient(&Sku::from("SKU-1"), body)
            .await
            .unwrap();

        assert_eq!(updated.sku.as_str(), "SKU-1");
        assert_eq!(updated.name, "Roma Tomato");
        assert_eq!(updated.stock, 4);
        assert_eq!(updated.stock_measurement, StockUnit::Kgs);
        assert_eq!(updated.orders, 4);
        assert_eq!(updated.year_increase, "7%");
        assert!(service.get_ingredient(&Sku::from("IGNORED")).await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service_with(vec![]);
        let err = service
            .update_ingredient(&Sku::from("SKU-1"), draft("SKU-1", "Tomato", 1, 1, "2026-11-01"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = service_with(vec![ingredient("SKU-1", "Tomato", 1, 0)]);
        assert!(service.delete_ingredient(&Sku::from("SKU-1")).await.unwrap());
        assert!(!service.delete_ingredient(&Sku::from("SKU-1")).await.unwrap());
        assert!(service.get_ingredient(&Sku::from("SKU-1")).await.is_err());
    }

    #[tokio::test]
    async fn test_derived_views() {
        let mut old = ingredient("OLD", "Milk", 10, 1);
        old.expiry_date = date(2026, 10, 18);
        let mut soon = ingredient("SOON", "Cream", 10, 1);
        soon.expiry_date = date(2026, 10, 22);
        let mut later = ingredient("LATER", "Rice", 2, 5);
        later.expiry_date = date(2027, 3, 1);
        let service = service_with(vec![old, soon, later]);

        let today = service.today();
        let expired = service.list_expired(today).await.unwrap();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].sku.as_str(), "OLD");

        let expiring = service
            .list_expiring_soon(today, service.default_horizon())
            .await
            .unwrap();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].sku.as_str(), "SOON");

        let low = service.list_low_stock().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].sku.as_str(), "LATER");
    }

    #[tokio::test]
    async fn test_resupply_sums_stock_and_bumps_orders_once() {
        let service = service_with(vec![ingredient("SKU-1", "Tomato", 10, 5)]);
        let report = service.resupply(vec![restock("SKU-1", 10)]).await.unwrap();

        assert_eq!(report.restocked(), 1);
        let stored = service.get_ingredient(&Sku::from("SKU-1")).await.unwrap();
        assert_eq!(stored.stock, 20);
        assert_eq!(stored.orders, 2);
        assert_eq!(stored.name, "Tomato");
        assert_eq!(stored.warning_stock_amount, 5);
    }

    #[tokio::test]
    async fn test_resupply_creates_flagged_new_ingredient() {
        let service = service_with(vec![]);
        let entry = ResupplyEntry {
            sku: "SKU-9".into(),
            name: "Basil".into(),
            stock: 6,
            expiry_date: "2026-10-25".into(),
            custom_unit: Some("bunch".into()),
            threshold: 2,
            is_new_ingredient: true,
            ..Default::default()
        };
        let report = service.resupply(vec![entry]).await.unwrap();
        assert_eq!(report.created(), 1);

        let stored = service.get_ingredient(&Sku::from("SKU-9")).await.unwrap();
        assert_eq!(stored.stock, 6);
        assert_eq!(stored.orders, 1);
        assert_eq!(stored.stock_measurement, StockUnit::Custom("bunch".into()));
    }

    #[tokio::test]
    async fn test_flagged_new_on_existing_sku_restocks() {
        let service = service_with(vec![ingredient("SKU-1", "Tomato", 10, 5)]);
        let mut entry = restock("SKU-1", 3);
        entry.is_new_ingredient = true;

        let report = service.resupply(vec![entry]).await.unwrap();
        assert_eq!(report.outcomes[0].action, ResupplyAction::Restocked);
        assert_eq!(report.outcomes[0].stock, 13);
        assert_eq!(report.outcomes[0].orders, 2);
    }

    #[tokio::test]
    async fn test_resupply_stops_at_first_error_and_keeps_prior_entries() {
        let service = service_with(vec![
            ingredient("A", "Salt", 1, 0),
            ingredient("C", "Sugar", 1, 0),
        ]);
        let err = service
            .resupply(vec![restock("A", 4), restock("MISSING", 1), restock("C", 9)])
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let a = service.get_ingredient(&Sku::from("A")).await.unwrap();
        assert_eq!(a.stock, 5);
        let c = service.get_ingredient(&Sku::from("C")).await.unwrap();
        assert_eq!(c.stock, 1);
        assert_eq!(c.orders, 1);
    }

    #[tokio::test]
    async fn test_resupply_rejects_negative_quantity() {
        let service = service_with(vec![ingredient("A", "Salt", 1, 0)]);
        let err = service.resupply(vec![restock("A", -1)]).await.unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        let a = service.get_ingredient(&Sku::from("A")).await.unwrap();
        assert_eq!(a.stock, 1);
    }

    #[tokio::test]
    async fn test_consume_by_name_clamps_and_skips_unknown() {
        let service = service_with(vec![ingredient("SKU-1", "Tomato", 20, 5)]);

        let updated = service.consume_by_name("Tomato", 7).await.unwrap().unwrap();
        assert_eq!(updated.stock, 13);
        assert_eq!(updated.orders, 1);

        let updated = service.consume_by_name("Tomato", 100).await.unwrap().unwrap();
        assert_eq!(updated.stock, 0);

        assert!(service.consume_by_name("Saffron", 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_consume_by_name_uses_first_of_duplicates() {
        let service = service_with(vec![
            ingredient("B-2", "Onion", 10, 0),
            ingredient("A-1", "Onion", 10, 0),
        ]);
        let updated = service.consume_by_name("Onion", 4).await.unwrap().unwrap();
        assert_eq!(updated.sku.as_str(), "A-1");

        let untouched = service.get_ingredient(&Sku::from("B-2")).await.unwrap();
        assert_eq!(untouched.stock, 10);
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_to_caller() {
        let service = IngredientLedgerService::with_clock(
            Arc::new(UnreachableStore),
            Arc::new(FixedClock(date(2026, 10, 19))),
            LedgerConfig::default(),
        );
        let err = service.list_low_stock().await.unwrap_err();
        assert!(matches!(err, InventoryError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_works_behind_trait_object_store() {
        let store: Arc<dyn IngredientStore> = Arc::new(InMemoryIngredientStore::new());
        let service = IngredientLedgerService::new(store, LedgerConfig::default());
        service
            .create_ingredient(draft("SKU-1", "Tomato", 1, 0, "2026-11-01"))
            .await
            .unwrap();
        assert_eq!(service.list_ingredients().await.unwrap().len(), 1);
    }
}
