//! Result of one fulfilled order batch.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::MenuItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionReport {
    /// Aggregated usage per ingredient name that matched a ledger record.
    pub consumed: BTreeMap<String, Decimal>,
    /// Stock left on each ledger record that was decremented.
    pub remaining_stock: BTreeMap<String, u64>,
    /// Ingredient names with no ledger record.
    pub skipped_ingredients: Vec<String>,
    /// Ordered recipe ids that do not exist.
    pub missing_recipes: Vec<MenuItemId>,
}

impl ConsumptionReport {
    pub fn applied(&self) -> usize {
        self.remaining_stock.len()
    }
}
