//! # Shared Types Crate
//!
//! This crate contains the records exchanged between subsystems and the
//! error taxonomy every port returns.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Ingredient` and `MenuItem` are defined once
//!   here and used unchanged by the ledger, the menu catalog, the fulfillment
//!   engine and the gateway.
//! - **Wire Compatibility**: Field names on the wire follow the stored
//!   document shape (`warningStockAmount`, `monthIncrease`, ...), so seed
//!   files and existing clients keep working.
//! - **Typed Failures**: Every fallible operation returns `InventoryResult<T>`
//!   so callers can tell `NotFound` from `DuplicateKey` from a store outage.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
