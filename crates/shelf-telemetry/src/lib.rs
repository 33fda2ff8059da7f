//! # Shelf Telemetry
//!
//! Observability for the Shelf-Life runtime.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` fmt layer, plain or JSON
//! - **Metrics**: Prometheus counters, exposed by the gateway at `/metrics`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelf_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SL_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SL_JSON_LOGS` | `false` | Emit JSON lines |
//! | `SL_SERVICE_NAME` | `shelf-life` | Service name in the startup log |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{encode_metrics, register_metrics, MetricsHandle};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Installs the log subscriber and registers every metric.
///
/// Hold the returned guard for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics = register_metrics()?;
    init_logging(&config)?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard { _metrics: metrics })
}

/// Keeps telemetry active.
pub struct TelemetryGuard {
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

/// Convenience macro for adding an amount to a counter.
#[macro_export]
macro_rules! metric_inc_by {
    ($metric:expr, $value:expr) => {
        $metric.inc_by($value)
    };
    ($metric:expr, $labels:expr, $value:expr) => {
        $metric.with_label_values($labels).inc_by($value)
    };
}

/// Structured log entry tagged with the emitting subsystem.
#[macro_export]
macro_rules! log_event {
    (info, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (error, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "shelf-life");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_metric_macros() {
        let before = metrics::UNITS_CONSUMED.get();
        metric_inc_by!(metrics::UNITS_CONSUMED, 3.0);
        assert!(metrics::UNITS_CONSUMED.get() >= before + 3.0);

        let before = metrics::RESUPPLY_ENTRIES.with_label_values(&["created"]).get();
        metric_inc!(metrics::RESUPPLY_ENTRIES, &["created"]);
        assert!(metrics::RESUPPLY_ENTRIES.with_label_values(&["created"]).get() >= before + 1.0);
    }
}
