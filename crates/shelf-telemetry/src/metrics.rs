//! Prometheus metrics for the Shelf-Life subsystems.
//!
//! All metrics follow the naming convention: `sl_<subsystem>_<metric>_total`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // INGREDIENT LEDGER METRICS (Subsystem 1)
    // =========================================================================

    /// Ingredient records created, by create call or new-ingredient resupply
    pub static ref INGREDIENTS_CREATED: Counter = Counter::new(
        "sl_ledger_ingredients_created_total",
        "Total number of ingredient records created"
    ).expect("metric creation failed");

    /// Committed resupply entries
    pub static ref RESUPPLY_ENTRIES: CounterVec = CounterVec::new(
        Opts::new("sl_ledger_resupply_entries_total", "Resupply entries applied"),
        &["action"]  // action: created/restocked
    ).expect("metric creation failed");

    // =========================================================================
    // ORDER FULFILLMENT METRICS (Subsystem 3)
    // =========================================================================

    /// Order batches processed
    pub static ref ORDER_BATCHES: Counter = Counter::new(
        "sl_fulfillment_order_batches_total",
        "Total number of order batches processed"
    ).expect("metric creation failed");

    /// Stock units removed from the ledger
    pub static ref UNITS_CONSUMED: Counter = Counter::new(
        "sl_fulfillment_units_consumed_total",
        "Total ingredient stock units consumed by orders"
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Backend faults by subsystem and error kind
    pub static ref STORE_ERRORS: CounterVec = CounterVec::new(
        Opts::new("sl_store_errors_total", "Store errors by subsystem and type"),
        &["subsystem", "error_type"]
    ).expect("metric creation failed");
}

/// Handle for the metrics registry
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; already-registered collectors are skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Ledger
        Box::new(INGREDIENTS_CREATED.clone()),
        Box::new(RESUPPLY_ENTRIES.clone()),
        // Fulfillment
        Box::new(ORDER_BATCHES.clone()),
        Box::new(UNITS_CONSUMED.clone()),
        // Errors
        Box::new(STORE_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
