//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::InventoryResult;

use crate::domain::{ConsumptionReport, OrderBatch};

/// Primary Order Fulfillment API (Driving Port)
#[async_trait]
pub trait OrderFulfillmentApi: Send + Sync {
    /// Aggregates the batch into a consumption plan and applies it.
    ///
    /// ## Errors
    ///
    /// Only store failures. Missing recipes and unknown ingredient names are
    /// reported in the result, not raised. Decrements applied before a
    /// failure stay applied.
    async fn submit_orders(&self, batch: OrderBatch) -> InventoryResult<ConsumptionReport>;
}
