//! # Shelf-Life Test Suite
//!
//! Cross-subsystem flows wired the way the runtime wires them.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs   # Container with a pinned clock, drafts, recipes
//!     ├── flows.rs      # Ledger, Menu Catalog and Order Fulfillment together
//!     └── http.rs       # The same flows through the REST gateway
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sl-tests
//! cargo test -p sl-tests integration::http
//! ```

pub mod integration;
