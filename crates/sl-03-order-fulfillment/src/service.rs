//! # Order Fulfillment Service
//!
//! Three phases per batch:
//!
//! 1. Resolve every ordered recipe and build the `ConsumptionPlan` (reads only)
//! 2. Apply one `consume_by_name` per ingredient name
//! 3. Add the ordered counts to each recipe's `orders` counter
//!
//! A recipe that disappears between phases 1 and 3 is reported as missing;
//! only store failures abort the batch.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{InventoryError, InventoryResult, MenuItemId};
use shelf_telemetry::metrics::{ORDER_BATCHES, UNITS_CONSUMED};
use shelf_telemetry::{log_event, metric_inc, metric_inc_by};
use tracing::debug;

use crate::domain::{ConsumptionPlan, ConsumptionReport, OrderBatch};
use crate::ports::{OrderFulfillmentApi, RecipeCatalog, StockLedger};

const SUBSYSTEM: &str = "order-fulfillment";

pub struct OrderFulfillmentService<R, L>
where
    R: RecipeCatalog + ?Sized,
    L: StockLedger + ?Sized,
{
    recipes: Arc<R>,
    ledger: Arc<L>,
}

impl<R, L> OrderFulfillmentService<R, L>
where
    R: RecipeCatalog + ?Sized,
    L: StockLedger + ?Sized,
{
    pub fn new(recipes: Arc<R>, ledger: Arc<L>) -> Self {
        Self { recipes, ledger }
    }

    /// Resolves recipes and aggregates usage. No writes.
    async fn plan(
        &self,
        batch: &OrderBatch,
        report: &mut ConsumptionReport,
    ) -> InventoryResult<(ConsumptionPlan, Vec<(MenuItemId, u64)>)> {
        let mut plan = ConsumptionPlan::new();
        let mut resolved = Vec::new();

        for (id, count) in batch.active_lines() {
            match self.recipes.find_recipe(id).await? {
                Some(recipe) => {
                    plan.add_recipe(&recipe, count);
                    resolved.push((recipe.id, count));
                }
                None => {
                    debug!(recipe = %id, "Ordered recipe not found; skipping");
                    report.missing_recipes.push(id.clone());
                }
            }
        }

        Ok((plan, resolved))
    }
}

#[async_trait]
impl<R, L> OrderFulfillmentApi for OrderFulfillmentService<R, L>
where
    R: RecipeCatalog + ?Sized,
    L: StockLedger + ?Sized,
{
    async fn submit_orders(&self, batch: OrderBatch) -> InventoryResult<ConsumptionReport> {
        let mut report = ConsumptionReport::default();
        let (plan, resolved) = self.plan(&batch, &mut report).await?;

        for (name, total) in plan.iter() {
            let units = ConsumptionPlan::units_for(total);
            match self.ledger.consume_by_name(name, units).await? {
                Some(updated) => {
                    metric_inc_by!(UNITS_CONSUMED, units as f64);
                    report.consumed.insert(name.to_string(), total);
                    report.remaining_stock.insert(name.to_string(), updated.stock);
                }
                None => report.skipped_ingredients.push(name.to_string()),
            }
        }

        for (id, count) in &resolved {
            match self.recipes.record_orders(id, *count).await {
                Ok(()) => {}
                Err(InventoryError::NotFound { .. }) => {
                    debug!(recipe = %id, "Recipe removed before its orders were recorded");
                    report.missing_recipes.push(id.clone());
                }
                Err(e) => return Err(e),
            }
        }

        metric_inc!(ORDER_BATCHES);
        log_event!(
            info,
            SUBSYSTEM,
            "Order batch fulfilled",
            recipes = resolved.len(),
            missing_recipes = report.missing_recipes.len(),
            applied = report.applied(),
            skipped = report.skipped_ingredients.len()
        );
        Ok(report)
    }
}
