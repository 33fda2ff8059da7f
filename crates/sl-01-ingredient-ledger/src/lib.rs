//! # Ingredient Ledger Subsystem
//!
//! **Subsystem ID:** 1
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Owns the canonical set of ingredient records keyed by SKU: stock, price,
//! expiry, warning threshold and the `orders` counter. Provides CRUD, the
//! three derived views (expired, expiring-soon, low-stock) and the resupply
//! workflow that adds delivered stock.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | One record per SKU | `IngredientStore::insert` - atomic check-and-insert |
//! | INVARIANT-2 | Stock never negative | `domain/mutation.rs` - `u64` stock, saturating consume |
//! | INVARIANT-3 | `orders` starts at 1, +1 per update/resupply | `domain/draft.rs`, `domain/mutation.rs` |
//! | INVARIANT-4 | Low stock is strict `<` | `Ingredient::is_low_stock()` |
//!
//! ## Consistency Model
//!
//! Every single-record read-modify-write goes through
//! `IngredientStore::update`, which applies an `IngredientMutation` under the
//! store's write lock. A resupply batch is a sequence of such steps with no
//! cross-step isolation:
//!
//! ```text
//! [entry 1] ──update──→ committed
//! [entry 2] ──update──→ committed
//! [entry 3] ──NotFound─→ batch stops, entries 1-2 stay committed
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/memory.rs - InMemoryIngredientStore                   │
//! │  service.rs         - IngredientLedgerService                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - IngredientLedgerApi trait                  │
//! │  ports/outbound.rs - IngredientStore, Clock traits              │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/draft.rs    - IngredientDraft validation                │
//! │  domain/mutation.rs - IngredientMutation (replace/restock/use)  │
//! │  domain/resupply.rs - ResupplyEntry, ResupplyReport             │
//! │  domain/queries.rs  - expiry and low-stock filters              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(test)]
pub(crate) mod test_utils;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::IngredientLedgerService;
