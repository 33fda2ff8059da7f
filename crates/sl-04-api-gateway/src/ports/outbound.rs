//! Outbound Ports (Driven Ports)

use async_trait::async_trait;
use shared_types::ServiceStatus;

/// Snapshot served by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    /// Status decided at startup.
    pub status: ServiceStatus,
    /// Result of a fresh store ping.
    pub store_reachable: bool,
}

/// Liveness source implemented by the runtime.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> HealthReport;
}
