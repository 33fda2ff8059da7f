//! Order batch as submitted by the point of sale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::MenuItemId;

/// Orders placed for one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderLine {
    /// Portions ordered. Non-positive counts are ignored.
    #[serde(default)]
    pub count: i64,
    /// Display name echoed by the client; not used for lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Map of recipe id to placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderBatch {
    pub lines: BTreeMap<MenuItemId, OrderLine>,
}

impl OrderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` portions of `recipe`, merging with an existing line.
    pub fn add(&mut self, recipe: impl Into<MenuItemId>, count: i64) -> &mut Self {
        let line = self.lines.entry(recipe.into()).or_default();
        line.count = line.count.saturating_add(count);
        self
    }

    /// Lines with a positive count, as `(recipe, count)`.
    pub fn active_lines(&self) -> impl Iterator<Item = (&MenuItemId, u64)> {
        self.lines.iter().filter_map(|(id, line)| {
            u64::try_from(line.count)
                .ok()
                .filter(|c| *c > 0)
                .map(|c| (id, c))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.active_lines().next().is_none()
    }
}
