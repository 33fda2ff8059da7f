//! Ports Layer

pub mod inbound;
pub mod outbound;

pub use inbound::MenuCatalogApi;
pub use outbound::MenuItemStore;
