//! Caller-supplied ingredient input and its validation.
//!
//! `IngredientDraft` mirrors the create/update request body. Quantities are
//! signed on the wire so a negative value is reported as a validation error
//! instead of a decode failure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{
    Ingredient, InventoryError, InventoryResult, Sku, StockUnit, EXPIRY_DATE_FORMAT, ZERO_TREND,
};

/// Create/update request for a single ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub sku: String,
    pub name: String,
    pub stock: i64,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(alias = "expiryDate")]
    pub expiry_date: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, rename = "customUnit")]
    pub custom_unit: Option<String>,
    #[serde(default)]
    pub threshold: i64,
}

/// Validated, caller-owned ingredient fields.
///
/// Everything an update may overwrite. `orders` and the trend fields are
/// deliberately absent: they are owned by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientFields {
    pub name: String,
    pub stock: u64,
    pub price: Option<Decimal>,
    pub expiry_date: NaiveDate,
    pub unit: StockUnit,
    pub threshold: u64,
}

impl IngredientFields {
    /// Builds a brand-new ledger record: `orders = 1`, trends zeroed.
    pub fn into_new_record(self, sku: Sku) -> Ingredient {
        Ingredient {
            sku,
            name: self.name,
            stock: self.stock,
            price: self.price,
            expiry_date: self.expiry_date,
            stock_measurement: self.unit,
            warning_stock_amount: self.threshold,
            orders: 1,
            month_increase: ZERO_TREND.to_string(),
            year_increase: ZERO_TREND.to_string(),
        }
    }
}

impl IngredientDraft {
    /// Validates the SKU and every field.
    pub fn validate(&self) -> InventoryResult<(Sku, IngredientFields)> {
        let sku = parse_sku(&self.sku)?;
        let fields = self.validate_fields()?;
        Ok((sku, fields))
    }

    /// Validates the fields only; used by updates where the SKU comes from
    /// the addressed record.
    pub fn validate_fields(&self) -> InventoryResult<IngredientFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InventoryError::validation("ingredient name must not be empty"));
        }

        Ok(IngredientFields {
            name: name.to_string(),
            stock: non_negative("stock", self.stock)?,
            price: validate_price(self.price)?,
            expiry_date: parse_expiry_date(&self.expiry_date)?,
            unit: StockUnit::resolve(&self.unit, self.custom_unit.as_deref()),
            threshold: non_negative("threshold", self.threshold)?,
        })
    }
}

/// Parses a non-blank SKU.
pub fn parse_sku(raw: &str) -> InventoryResult<Sku> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::validation("sku must not be empty"));
    }
    Ok(Sku::from(trimmed))
}

/// Parses a `YYYY-MM-DD` expiry date.
pub fn parse_expiry_date(raw: &str) -> InventoryResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), EXPIRY_DATE_FORMAT).map_err(|e| {
        InventoryError::validation(format!(
            "expiry date '{}' is not in YYYY-MM-DD form: {}",
            raw, e
        ))
    })
}

pub(crate) fn non_negative(field: &str, value: i64) -> InventoryResult<u64> {
    u64::try_from(value)
        .map_err(|_| InventoryError::validation(format!("{} must not be negative, got {}", field, value)))
}

pub(crate) fn validate_price(price: Option<Decimal>) -> InventoryResult<Option<Decimal>> {
    match price {
        Some(p) if p.is_sign_negative() && !p.is_zero() => Err(InventoryError::validation(
            format!("price must not be negative, got {}", p),
        )),
        other => Ok(other),
    }
}
