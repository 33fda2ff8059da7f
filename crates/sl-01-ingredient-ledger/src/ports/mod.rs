//! Ports Layer
//!
//! - Driving Port (inbound): `IngredientLedgerApi`, used by the gateway and
//!   the order-fulfillment bridge.
//! - Driven Ports (outbound): `IngredientStore` and `Clock`.

pub mod inbound;
pub mod outbound;

pub use inbound::IngredientLedgerApi;
pub use outbound::{Clock, FixedClock, IngredientStore, SystemClock};
