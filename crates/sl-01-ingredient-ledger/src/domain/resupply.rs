//! Resupply batch entries and the per-entry outcome report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{InventoryError, InventoryResult, Sku, StockUnit};

use super::draft::{non_negative, parse_expiry_date, parse_sku, validate_price, IngredientFields};
use super::mutation::Restock;

/// One delivery line in a resupply batch.
///
/// Most fields are optional overrides. Empty strings, a zero threshold and a
/// zero price mean "keep what the ledger already has".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResupplyEntry {
    pub sku: String,
    pub name: String,
    /// Delivered quantity.
    pub stock: i64,
    pub price: Option<Decimal>,
    #[serde(alias = "expiry_date")]
    pub expiry_date: String,
    pub unit: String,
    pub custom_unit: Option<String>,
    pub threshold: i64,
    #[serde(alias = "is_new_ingredient")]
    pub is_new_ingredient: bool,
    /// Informational only; not stored on the record.
    pub supplier: Option<String>,
}

impl ResupplyEntry {
    pub fn sku(&self) -> InventoryResult<Sku> {
        parse_sku(&self.sku)
    }

    /// Delivered quantity; negative deliveries are rejected.
    pub fn quantity(&self) -> InventoryResult<u64> {
        non_negative("stock", self.stock)
    }

    /// Builds the restock step for an existing record.
    pub fn to_restock(&self) -> InventoryResult<Restock> {
        let quantity = self.quantity()?;

        let name = Some(self.name.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let price = validate_price(self.price)?.filter(|p| !p.is_zero());

        let expiry_date = match self.expiry_date.trim() {
            "" => None,
            raw => Some(parse_expiry_date(raw)?),
        };

        let unit = Some(StockUnit::resolve(&self.unit, self.custom_unit.as_deref()))
            .filter(|u| !u.is_blank());

        let threshold = match non_negative("threshold", self.threshold)? {
            0 => None,
            t => Some(t),
        };

        Ok(Restock {
            quantity,
            name,
            price,
            expiry_date,
            unit,
            threshold,
        })
    }

    /// Builds the fields of a brand-new record.
    ///
    /// A new ingredient needs a name and an expiry date; unit falls back to
    /// `individual`.
    pub fn to_new_fields(&self) -> InventoryResult<IngredientFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InventoryError::validation(format!(
                "new ingredient {} needs a name",
                self.sku.trim()
            )));
        }
        if self.expiry_date.trim().is_empty() {
            return Err(InventoryError::validation(format!(
                "new ingredient {} needs an expiry date",
                self.sku.trim()
            )));
        }

        let unit = StockUnit::resolve(&self.unit, self.custom_unit.as_deref());

        Ok(IngredientFields {
            name: name.to_string(),
            stock: self.quantity()?,
            price: validate_price(self.price)?,
            expiry_date: parse_expiry_date(&self.expiry_date)?,
            unit: if unit.is_blank() {
                StockUnit::default()
            } else {
                unit
            },
            threshold: non_negative("threshold", self.threshold)?,
        })
    }
}

/// What happened to one committed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResupplyAction {
    Created,
    Restocked,
}

impl ResupplyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResupplyAction::Created => "created",
            ResupplyAction::Restocked => "restocked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResupplyOutcome {
    pub sku: Sku,
    pub action: ResupplyAction,
    /// Stock after the entry was applied.
    pub stock: u64,
    pub orders: u64,
}

/// Entries committed by a resupply batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResupplyReport {
    pub outcomes: Vec<ResupplyOutcome>,
}

impl ResupplyReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn created(&self) -> usize {
        self.count(ResupplyAction::Created)
    }

    pub fn restocked(&self) -> usize {
        self.count(ResupplyAction::Restocked)
    }

    fn count(&self, action: ResupplyAction) -> usize {
        self.outcomes.iter().filter(|o| o.action == action).count()
    }
}
