//! # Adapters Layer
//!
//! Driven-port implementations that live with the subsystem. The RocksDB
//! store lives in `inventory-runtime`.

pub mod memory;

pub use memory::InMemoryIngredientStore;
