//! # Adapters
//!
//! Port implementations that connect the subsystems to each other and to
//! the storage backends.
//!
//! - `bridges`: Order Fulfillment's outbound ports over the Menu Catalog and
//!   Ingredient Ledger inbound APIs
//! - `health`: the gateway's `HealthProbe`
//! - `storage`: offline and RocksDB store implementations

pub mod bridges;
pub mod health;
pub mod storage;

pub use bridges::{LedgerStockAdapter, MenuRecipeAdapter};
pub use health::StoreHealthProbe;
pub use storage::OfflineStore;
