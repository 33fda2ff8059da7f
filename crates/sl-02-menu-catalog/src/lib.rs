//! # Menu Catalog Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Stores menu items (recipes). Each item carries a snapshot of its
//! ingredient lines, referenced by ingredient **name**. The snapshot is
//! copied at creation and never follows later ledger changes.
//!
//! The catalog has no derived logic of its own. Order Fulfillment reads
//! recipes from it and bumps their `orders` counter through
//! `MenuCatalogApi::record_orders`.
//!
//! ## Module Structure
//!
//! ```text
//! domain/   - MenuItemDraft validation, MenuItemMutation
//! ports/    - MenuCatalogApi (inbound), MenuItemStore (outbound)
//! adapters/ - InMemoryMenuItemStore
//! service   - MenuCatalogService
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::MenuCatalogService;
