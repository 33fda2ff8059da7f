//! Single-record read-modify-write operations.
//!
//! A mutation is computed against the current record inside the store's
//! write lock, so each variant is one atomic step. Stores never implement
//! business rules themselves; they call [`IngredientMutation::apply`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared_types::{Ingredient, StockUnit};

use super::draft::IngredientFields;

/// Delivered stock plus the fields a delivery may override.
///
/// `None` means "carry forward the existing value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Restock {
    pub quantity: u64,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub expiry_date: Option<NaiveDate>,
    pub unit: Option<StockUnit>,
    pub threshold: Option<u64>,
}

/// An atomic change to one ingredient record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientMutation {
    /// Full replace of caller-owned fields. `orders` +1, trends kept.
    Replace(IngredientFields),
    /// Adds delivered stock. `orders` +1.
    Restock(Restock),
    /// Removes consumed units, clamping at zero. `orders` untouched.
    Consume { units: u64 },
}

impl IngredientMutation {
    /// Applies the change in place.
    pub fn apply(&self, record: &mut Ingredient) {
        match self {
            IngredientMutation::Replace(fields) => {
                record.name = fields.name.clone();
                record.stock = fields.stock;
                record.price = fields.price;
                record.expiry_date = fields.expiry_date;
                record.stock_measurement = fields.unit.clone();
                record.warning_stock_amount = fields.threshold;
                record.orders = record.orders.saturating_add(1);
            }
            IngredientMutation::Restock(restock) => {
                record.stock = record.stock.saturating_add(restock.quantity);
                if let Some(name) = &restock.name {
                    record.name = name.clone();
                }
                if let Some(price) = restock.price {
                    record.price = Some(price);
                }
                if let Some(expiry) = restock.expiry_date {
                    record.expiry_date = expiry;
                }
                if let Some(unit) = &restock.unit {
                    record.stock_measurement = unit.clone();
                }
                if let Some(threshold) = restock.threshold {
                    record.warning_stock_amount = threshold;
                }
                record.orders = record.orders.saturating_add(1);
            }
            IngredientMutation::Consume { units } => {
                record.stock = record.stock.saturating_sub(*units);
            }
        }
    }

    /// Short label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            IngredientMutation::Replace(_) => "replace",
            IngredientMutation::Restock(_) => "restock",
            IngredientMutation::Consume { .. } => "consume",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Sku, ZERO_TREND};

    fn record(stock: u64) -> Ingredient {
        Ingredient {
            sku: Sku::from("SKU-1"),
            name: "Tomato".into(),
            stock,
            price: Some(Decimal::new(100, 2)),
            expiry_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            stock_measurement: StockUnit::Kgs,
            warning_stock_amount: 5,
            orders: 3,
            month_increase: "12%".into(),
            year_increase: ZERO_TREND.into(),
        }
    }

    #[test]
    fn test_replace_carries_counters_forward() {
        let mut r = record(10);
        let fields = IngredientFields {
            name: "Roma Tomato".into(),
            stock: 2,
            price: None,
            expiry_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            unit: StockUnit::Bags,
            threshold: 1,
        };
        IngredientMutation::Replace(fields).apply(&mut r);

        assert_eq!(r.name, "Roma Tomato");
        assert_eq!(r.stock, 2);
        assert_eq!(r.price, None);
        assert_eq!(r.orders, 4);
        assert_eq!(r.month_increase, "12%");
        assert_eq!(r.sku.as_str(), "SKU-1");
    }

    #[test]
    fn test_restock_adds_and_keeps_unset_fields() {
        let mut r = record(10);
        IngredientMutation::Restock(Restock {
            quantity: 10,
            ..Default::default()
        })
        .apply(&mut r);

        assert_eq!(r.stock, 20);
        assert_eq!(r.orders, 4);
        assert_eq!(r.name, "Tomato");
        assert_eq!(r.warning_stock_amount, 5);
        assert_eq!(r.stock_measurement, StockUnit::Kgs);
    }

    #[test]
    fn test_restock_overrides() {
        let mut r = record(0);
        IngredientMutation::Restock(Restock {
            quantity: 4,
            name: Some("Cherry Tomato".into()),
            price: Some(Decimal::new(300, 2)),
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1),
            unit: Some(StockUnit::Cartons),
            threshold: Some(8),
        })
        .apply(&mut r);

        assert_eq!(r.stock, 4);
        assert_eq!(r.name, "Cherry Tomato");
        assert_eq!(r.price, Some(Decimal::new(300, 2)));
        assert_eq!(r.stock_measurement, StockUnit::Cartons);
        assert_eq!(r.warning_stock_amount, 8);
    }

    #[test]
    fn test_consume_clamps_at_zero() {
        let mut r = record(5);
        IngredientMutation::Consume { units: 3 }.apply(&mut r);
        assert_eq!(r.stock, 2);

        IngredientMutation::Consume { units: u64::MAX }.apply(&mut r);
        assert_eq!(r.stock, 0);
        assert_eq!(r.orders, 3);
    }
}
