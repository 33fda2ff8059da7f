//! # Error Types
//!
//! Defines the error taxonomy shared by every subsystem port.

use thiserror::Error;

/// Which record set an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A ledger record keyed by SKU.
    Ingredient,
    /// A menu record keyed by generated id.
    MenuItem,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Ingredient => write!(f, "Ingredient"),
            RecordKind::MenuItem => write!(f, "Menu item"),
        }
    }
}

/// Errors that can occur in any inventory subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A record with this key already exists.
    #[error("{kind} already exists: {key}")]
    DuplicateKey { kind: RecordKind, key: String },

    /// No record with this key.
    #[error("{kind} not found: {key}")]
    NotFound { kind: RecordKind, key: String },

    /// Caller input rejected before touching the store.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A stored record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl InventoryError {
    pub fn duplicate_ingredient(sku: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind: RecordKind::Ingredient,
            key: sku.into(),
        }
    }

    pub fn ingredient_not_found(sku: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Ingredient,
            key: sku.into(),
        }
    }

    pub fn duplicate_menu_item(id: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind: RecordKind::MenuItem,
            key: id.into(),
        }
    }

    pub fn menu_item_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::MenuItem,
            key: id.into(),
        }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    /// True for `NotFound` of any record kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Short label used for metrics and log fields.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::DuplicateKey { .. } => "duplicate_key",
            Self::NotFound { .. } => "not_found",
            Self::Validation(_) => "validation",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Result alias used across all subsystems.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Whether the runtime could reach its store at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Normal operation.
    Running,
    /// Store ping failed; requests are served but store calls may fail.
    Degraded,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Running => "running",
            ServiceStatus::Degraded => "degraded",
        }
    }
}
