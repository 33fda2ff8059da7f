//! # Shelf-Life Inventory Runtime
//!
//! Binary entry point. See the library crate for the startup sequence.

use std::sync::Arc;

use anyhow::{Context, Result};
use inventory_runtime::container::RuntimeConfig;
use inventory_runtime::InventoryRuntime;
use shelf_telemetry::{init_telemetry, TelemetryConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let config = RuntimeConfig::load().context("Failed to load configuration")?;

    let runtime = Arc::new(InventoryRuntime::new(config));
    runtime.start().await;

    let mut server = {
        let runtime = Arc::clone(&runtime);
        tokio::spawn(async move { runtime.serve().await })
    };

    info!("Inventory runtime is running. Press Ctrl+C to stop.");
    // The server only returns early on a bind or I/O failure.
    let early_exit = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            None
        }
        result = &mut server => Some(result),
    };

    runtime.shutdown().await;

    let result = match early_exit {
        Some(result) => result,
        None => server.await,
    };
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!(error = %e, "HTTP server exited with error");
            Err(e)
        }
        Err(e) => Err(e).context("HTTP server task panicked"),
    }
}
