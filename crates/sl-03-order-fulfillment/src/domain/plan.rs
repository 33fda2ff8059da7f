//! Consumption plan: per-name usage totals for one batch.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared_types::MenuItem;

/// Usage totals keyed by ingredient name, accumulated across every recipe
/// in a batch before any stock is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumptionPlan {
    totals: BTreeMap<String, Decimal>,
}

impl ConsumptionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount * count` for every ingredient line of `recipe`.
    pub fn add_recipe(&mut self, recipe: &MenuItem, count: u64) {
        let count = Decimal::from(count);
        for line in &recipe.ingredients {
            let usage = line.amount.saturating_mul(count);
            let total = self.totals.entry(line.name.clone()).or_insert(Decimal::ZERO);
            *total = total.saturating_add(usage);
        }
    }

    pub fn total(&self, name: &str) -> Option<Decimal> {
        self.totals.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Whole stock units to remove for `total`: rounded up, never negative.
    pub fn units_for(total: Decimal) -> u64 {
        if total <= Decimal::ZERO {
            return 0;
        }
        total.ceil().to_u64().unwrap_or(u64::MAX)
    }
}
