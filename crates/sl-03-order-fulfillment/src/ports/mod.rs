//! Ports Layer

pub mod inbound;
pub mod outbound;

pub use inbound::OrderFulfillmentApi;
pub use outbound::{RecipeCatalog, StockLedger};
