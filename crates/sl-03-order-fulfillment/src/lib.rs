//! # Order Fulfillment Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Converts a batch of placed orders (recipe id → count) into aggregate
//! ingredient consumption and applies it to the Ingredient Ledger.
//!
//! ## Flow
//!
//! ```text
//! OrderBatch ──resolve──→ recipes ──aggregate by name──→ ConsumptionPlan
//!                                                             │
//!                        one Consume per name ←───────────────┘
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Usage aggregated before any write | `domain/plan.rs` |
//! | INVARIANT-2 | One decrement per ingredient name per batch | `service.rs` |
//! | INVARIANT-3 | Fractional totals round up | `ConsumptionPlan::units_for` |
//! | INVARIANT-4 | Stock clamps at zero | ledger `Consume` mutation |
//!
//! Recipes reference ingredients **by name**. A missing recipe or an
//! unmatched ingredient name is skipped, never an error. The batch is not
//! transactional: a store failure part-way leaves earlier decrements applied.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::*;
pub use ports::*;
pub use service::OrderFulfillmentService;
