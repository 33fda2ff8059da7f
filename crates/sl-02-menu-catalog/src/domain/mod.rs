//! # Domain Layer - Menu Catalog

pub mod draft;
pub mod mutation;

pub use draft::*;
pub use mutation::*;
