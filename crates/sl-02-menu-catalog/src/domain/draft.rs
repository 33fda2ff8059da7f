//! Caller-supplied menu item input and its validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{
    Category, InventoryError, InventoryResult, MenuIngredient, MenuItem, MenuItemId, Season,
};

/// Create/update request for a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<MenuIngredient>,
    pub price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

/// Validated caller-owned fields of a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemFields {
    pub name: String,
    pub ingredients: Vec<MenuIngredient>,
    pub price: Decimal,
    pub category: Category,
    pub description: Option<String>,
    pub season: Option<Season>,
}

impl MenuItemFields {
    /// New catalog entry with zero orders.
    pub fn into_item(self, id: MenuItemId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            ingredients: self.ingredients,
            price: self.price,
            category: self.category,
            description: self.description,
            season: self.season,
            orders: 0,
        }
    }
}

impl MenuItemDraft {
    pub fn validate(self) -> InventoryResult<MenuItemFields> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(InventoryError::validation("menu item name must not be empty"));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(InventoryError::validation(format!(
                "menu item price must not be negative, got {}",
                self.price
            )));
        }

        let mut ingredients = Vec::with_capacity(self.ingredients.len());
        for line in self.ingredients {
            let line_name = line.name.trim().to_string();
            if line_name.is_empty() {
                return Err(InventoryError::validation(format!(
                    "ingredient line of '{}' has no name",
                    name
                )));
            }
            if line.amount.is_sign_negative() && !line.amount.is_zero() {
                return Err(InventoryError::validation(format!(
                    "amount of '{}' must not be negative, got {}",
                    line_name, line.amount
                )));
            }
            ingredients.push(MenuIngredient {
                name: line_name,
                ..line
            });
        }

        Ok(MenuItemFields {
            name,
            ingredients,
            price: self.price,
            category: self.category,
            description: self.description.filter(|d| !d.trim().is_empty()),
            season: self.season,
        })
    }
}
