//! # API Gateway Subsystem
//!
//! **Subsystem ID:** 4
//!
//! REST surface over the three inbound APIs. Handlers only parse requests,
//! call a port and map `InventoryError` to an HTTP status; no business rule
//! lives here.
//!
//! ## Error Mapping
//!
//! | Error | Status |
//! |-------|--------|
//! | `DuplicateKey` | 409 |
//! | `NotFound` | 404 |
//! | `Validation`, malformed body or query | 400 |
//! | `StoreUnavailable` | 503 |
//! | anything else | 500 |
//!
//! Error bodies are `{"detail": "..."}`.

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod ports;
pub mod router;
pub mod service;

pub use domain::{ApiError, CorsConfig, GatewayConfig, GatewayError};
pub use ports::{HealthProbe, HealthReport};
pub use router::{build_router, AppState};
pub use service::ApiGatewayService;
