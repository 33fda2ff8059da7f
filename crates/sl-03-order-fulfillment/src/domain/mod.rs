//! # Domain Layer - Order Fulfillment

pub mod order;
pub mod plan;
pub mod report;

pub use order::*;
pub use plan::*;
pub use report::*;
