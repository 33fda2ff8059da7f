//! # Inventory Runtime
//!
//! Owns the lifecycle of the Shelf-Life backend: builds the service
//! container, checks the store, imports the seed document and serves the
//! REST gateway until shutdown.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and service wiring
//! - `seed/` - Startup seed import
//! - `adapters/` - Bridges, health probe and storage backends
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (file, then environment)
//! 2. Open stores and build the subsystems
//! 3. Ping the store; on failure run `Degraded` and skip the seed
//! 4. Import the seed document if both record sets are empty
//! 5. Serve HTTP until the shutdown signal
//! 6. Optionally purge both record sets

pub mod adapters;
pub mod container;
pub mod seed;

use std::sync::Arc;

use anyhow::{Context, Result};
use shared_types::ServiceStatus;
use sl_04_api_gateway::ApiGatewayService;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::container::{RuntimeConfig, ServiceContainer};
use crate::seed::{SeedLoader, SeedOutcome};

/// The runtime orchestrating every subsystem.
pub struct InventoryRuntime {
    /// Service container with all initialized services.
    container: Arc<ServiceContainer>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver.
    shutdown_rx: watch::Receiver<bool>,
}

impl InventoryRuntime {
    /// Create a runtime with stores opened from `config`.
    pub fn new(config: RuntimeConfig) -> Self {
        info!("Creating Shelf-Life inventory runtime");
        Self::from_container(ServiceContainer::new(config))
    }

    /// Create a runtime around an already-built container.
    pub fn from_container(container: ServiceContainer) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            container: Arc::new(container),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Checks the store and imports the seed document.
    ///
    /// Never fails: an unreachable store leaves the runtime `Degraded` and a
    /// seed problem is logged.
    pub async fn start(&self) -> ServiceStatus {
        info!("===========================================");
        info!("  Shelf-Life Inventory Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        let status = match self.container.health.ping().await {
            Ok(()) => {
                info!("Connected to store");
                ServiceStatus::Running
            }
            Err(e) => {
                error!(error = %e, "Store ping failed; running degraded");
                ServiceStatus::Degraded
            }
        };
        self.container.health.set_status(status);

        if status == ServiceStatus::Running && self.container.config.seed.enabled {
            self.import_seed().await;
        }

        status
    }

    async fn import_seed(&self) {
        let path = &self.container.config.seed.path;
        let loader = SeedLoader::new(
            Arc::clone(&self.container.ingredient_store),
            Arc::clone(&self.container.menu),
        );

        match loader.load_file(path, self.container.ledger.today()).await {
            Ok(SeedOutcome::Imported {
                ingredients,
                menu_items,
            }) => {
                info!(path = %path.display(), ingredients, menu_items, "Seed import complete");
            }
            Ok(SeedOutcome::SkippedNonEmpty) => {}
            Err(e) if e.is_missing_file() => {
                warn!(path = %path.display(), "Seed file not found; skipping import");
            }
            Err(e) => {
                error!(error = %e, "Seed import failed");
            }
        }
    }

    /// Serves HTTP on the configured address until `shutdown` is called.
    pub async fn serve(&self) -> Result<()> {
        let gateway = self.gateway()?;
        let addr = gateway.addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        self.serve_on(listener).await
    }

    /// Serves HTTP on an already-bound listener until `shutdown` is called.
    pub async fn serve_on(&self, listener: TcpListener) -> Result<()> {
        let mut shutdown = self.shutdown_rx.clone();
        self.gateway()?
            .serve_on(listener, async move {
                while !*shutdown.borrow_and_update() {
                    if shutdown.changed().await.is_err() {
                        break;
                    }
                }
            })
            .await
            .context("HTTP server failed")
    }

    fn gateway(&self) -> Result<ApiGatewayService> {
        let config = &self.container.config;
        ApiGatewayService::new(&config.server, &config.cors, self.container.app_state())
            .context("Failed to build API gateway")
    }

    /// Stops the HTTP server and, if configured, purges both record sets.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");

        self.shutdown_tx.send_replace(true);

        if self.container.config.seed.purge_on_shutdown {
            self.purge().await;
        }

        info!("Shutdown complete");
    }

    async fn purge(&self) {
        let ingredients = self.container.ingredient_store.clear().await;
        let menu_items = self.container.menu_store.clear().await;
        match (ingredients, menu_items) {
            (Ok(()), Ok(())) => info!("Purged ingredients and menu items"),
            (Err(e), _) | (_, Err(e)) => error!(error = %e, "Purge on shutdown failed"),
        }
    }

    /// Get a reference to the service container.
    pub fn container(&self) -> Arc<ServiceContainer> {
        Arc::clone(&self.container)
    }
}
