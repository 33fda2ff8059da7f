//! Tower middleware applied to every route.

pub mod cors;

pub use cors::create_cors_layer;
