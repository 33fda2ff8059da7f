//! # Service Container
//!
//! Holds the stores and subsystem services with their lifetimes tied to the
//! runtime, and the configuration they were built from.
//!
//! Dependency order:
//!
//! ```text
//! Stores (ingredients, menu items)
//!   └─ Ingredient Ledger, Menu Catalog
//!        └─ Order Fulfillment (via bridges over both)
//!             └─ API Gateway state
//! ```

pub mod config;
pub mod services;

pub use config::{
    ConfigError, InventoryConfig, RuntimeConfig, SeedConfig, StoreBackend, StoreConfig,
};
pub use services::ServiceContainer;
