//! Single-record changes applied by the store under its write lock.

use shared_types::MenuItem;

use super::draft::MenuItemFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemMutation {
    /// Replaces caller-owned fields; `orders` is kept.
    Replace(MenuItemFields),
    /// Adds `count` placed orders.
    RecordOrders(u64),
}

impl MenuItemMutation {
    pub fn apply(&self, item: &mut MenuItem) {
        match self {
            MenuItemMutation::Replace(fields) => {
                item.name = fields.name.clone();
                item.ingredients = fields.ingredients.clone();
                item.price = fields.price;
                item.category = fields.category;
                item.description = fields.description.clone();
                item.season = fields.season;
            }
            MenuItemMutation::RecordOrders(count) => {
                item.orders = item.orders.saturating_add(*count);
            }
        }
    }
}
