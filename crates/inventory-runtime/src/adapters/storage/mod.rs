//! # Storage Adapters
//!
//! Store backends beyond the in-memory ones that live with each subsystem.
//!
//! Enable the `rocksdb` feature for the persistent backend:
//!
//! ```toml
//! inventory-runtime = { path = "...", features = ["rocksdb"] }
//! ```
//!
//! Each record set gets its own column family.

pub mod offline;

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

pub use offline::OfflineStore;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{
    RocksDbConfig, RocksDbIngredientStore, RocksDbMenuItemStore, RocksDbStore, COLUMN_FAMILIES,
    CF_INGREDIENTS, CF_MENU_ITEMS,
};
