//! # Domain Layer - Ingredient Ledger
//!
//! Pure business logic: input validation, record mutations, resupply
//! planning and the derived-view filters. Nothing here touches the store.

pub mod config;
pub mod draft;
pub mod mutation;
pub mod queries;
pub mod resupply;

pub use config::*;
pub use draft::*;
pub use mutation::*;
pub use queries::*;
pub use resupply::*;
