//! # Seed Module
//!
//! Bulk import of the JSON seed document at startup.
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "ingredients": [{ "sku": "SKU-1", "name": "Tomato", "expiry_date": "2026-11-01", ... }],
//!   "recipes": { "Appetizers": [{ "name": "Bruschetta", "ingredients": [...], ... }] }
//! }
//! ```
//!
//! ## Import Rules
//!
//! 1. Import only when both record sets are empty
//! 2. An unparseable `expiry_date` falls back to today (logged)
//! 3. The group key under `recipes` becomes each recipe's category
//! 4. Seed ids are preserved; recipes without one get a fresh id

pub mod loader;

pub use loader::{SeedDocument, SeedError, SeedIngredient, SeedLoader, SeedOutcome, SeedRecipe};
