//! # Core Domain Entities
//!
//! Defines the inventory records shared by every subsystem.
//!
//! ## Clusters
//!
//! - **Ledger**: `Ingredient`, `Sku`, `StockUnit`
//! - **Menu**: `MenuItem`, `MenuItemId`, `MenuIngredient`, `Category`, `Season`

use std::borrow::Borrow;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trend value written on freshly created ingredients.
pub const ZERO_TREND: &str = "0%";

/// Date format accepted for expiry dates on the wire.
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// CLUSTER A: THE LEDGER
// =============================================================================

/// Stock-keeping unit. Primary key of an ingredient record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Sku {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unit an ingredient's stock is counted in.
///
/// Serialized as a plain string. Anything outside the standard set
/// round-trips as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockUnit {
    Individual,
    Bags,
    Bunches,
    Cartons,
    Kgs,
    Custom(String),
}

impl StockUnit {
    /// Picks the unit the caller meant: a non-empty custom unit wins over
    /// the selected standard unit.
    pub fn resolve(unit: &str, custom_unit: Option<&str>) -> Self {
        match custom_unit.map(str::trim).filter(|c| !c.is_empty()) {
            Some(custom) => Self::from(custom.to_string()),
            None => Self::from(unit.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StockUnit::Individual => "individual",
            StockUnit::Bags => "bags",
            StockUnit::Bunches => "bunches",
            StockUnit::Cartons => "cartons",
            StockUnit::Kgs => "kgs",
            StockUnit::Custom(unit) => unit,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl Default for StockUnit {
    fn default() -> Self {
        StockUnit::Individual
    }
}

impl From<String> for StockUnit {
    fn from(value: String) -> Self {
        match value.as_str() {
            "individual" => StockUnit::Individual,
            "bags" => StockUnit::Bags,
            "bunches" => StockUnit::Bunches,
            "cartons" => StockUnit::Cartons,
            "kgs" => StockUnit::Kgs,
            _ => StockUnit::Custom(value),
        }
    }
}

impl From<StockUnit> for String {
    fn from(value: StockUnit) -> Self {
        match value {
            StockUnit::Custom(unit) => unit,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for StockUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ingredient record as held by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Primary key. Never changes after creation.
    #[serde(alias = "_id")]
    pub sku: Sku,
    pub name: String,
    /// Units on hand. Consumption clamps at zero.
    pub stock: u64,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub expiry_date: NaiveDate,
    pub stock_measurement: StockUnit,
    /// Stock strictly below this amount is "low".
    #[serde(rename = "warningStockAmount")]
    pub warning_stock_amount: u64,
    /// Number of creates, updates and resupplies that touched this SKU.
    #[serde(default = "default_orders")]
    pub orders: u64,
    #[serde(rename = "monthIncrease", default = "zero_trend")]
    pub month_increase: String,
    #[serde(rename = "yearIncrease", default = "zero_trend")]
    pub year_increase: String,
}

fn default_orders() -> u64 {
    1
}

fn zero_trend() -> String {
    ZERO_TREND.to_string()
}

impl Ingredient {
    /// True when stock is strictly below the warning threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.warning_stock_amount
    }

    /// True when the expiry date lies strictly before `as_of`.
    pub fn is_expired(&self, as_of: NaiveDate) -> bool {
        self.expiry_date < as_of
    }

    /// True when `from <= expiry_date <= until`.
    pub fn expires_between(&self, from: NaiveDate, until: NaiveDate) -> bool {
        from <= self.expiry_date && self.expiry_date <= until
    }
}

// =============================================================================
// CLUSTER B: THE MENU
// =============================================================================

/// Opaque identifier of a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MenuItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for MenuItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Menu section. Plural and lowercase spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "Appetizers", alias = "appetizer", alias = "appetizers")]
    Appetizer,
    #[serde(
        alias = "Entrees",
        alias = "entree",
        alias = "entrees",
        alias = "Main",
        alias = "Mains",
        alias = "mains"
    )]
    Entree,
    #[serde(alias = "Desserts", alias = "dessert", alias = "desserts")]
    Dessert,
    #[serde(alias = "Drinks", alias = "drink", alias = "drinks")]
    Drink,
}

impl Category {
    /// Parses a free-form section label such as a seed file's group key.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "appetizer" => Some(Category::Appetizer),
            "entree" | "main" => Some(Category::Entree),
            "dessert" => Some(Category::Dessert),
            "drink" => Some(Category::Drink),
            _ => None,
        }
    }
}

/// Season a dish is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(alias = "fall")]
    Fall,
    #[serde(alias = "winter")]
    Winter,
    #[serde(alias = "summer")]
    Summer,
    #[serde(alias = "all")]
    All,
}

/// One line of a recipe: which ingredient (by name) and how much per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuIngredient {
    /// Matched against ledger records by name, not SKU.
    pub name: String,
    pub amount: Decimal,
    #[serde(default, alias = "unit", skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// A dish on the menu with its ingredient snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub ingredients: Vec<MenuIngredient>,
    pub price: Decimal,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(default)]
    pub orders: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tomato(stock: u64, threshold: u64) -> Ingredient {
        Ingredient {
            sku: Sku::from("SKU-1"),
            name: "Tomato".into(),
            stock,
            price: Some(Decimal::new(250, 2)),
            expiry_date: date(2026, 3, 10),
            stock_measurement: StockUnit::Individual,
            warning_stock_amount: threshold,
            orders: 1,
            month_increase: ZERO_TREND.into(),
            year_increase: ZERO_TREND.into(),
        }
    }

    #[test]
    fn test_low_stock_is_strict() {
        assert!(tomato(4, 5).is_low_stock());
        assert!(!tomato(5, 5).is_low_stock());
        assert!(!tomato(6, 5).is_low_stock());
    }

    #[test]
    fn test_expiry_bounds() {
        let item = tomato(1, 1);
        assert!(item.is_expired(date(2026, 3, 11)));
        assert!(!item.is_expired(date(2026, 3, 10)));
        assert!(item.expires_between(date(2026, 3, 10), date(2026, 3, 10)));
        assert!(!item.expires_between(date(2026, 3, 11), date(2026, 3, 20)));
    }

    #[test]
    fn test_stock_unit_custom_wins() {
        assert_eq!(StockUnit::resolve("kgs", None), StockUnit::Kgs);
        assert_eq!(StockUnit::resolve("kgs", Some("  ")), StockUnit::Kgs);
        assert_eq!(
            StockUnit::resolve("custom", Some("crates")),
            StockUnit::Custom("crates".into())
        );
    }

    #[test]
    fn test_ingredient_wire_names() {
        let json = serde_json::to_value(tomato(10, 5)).unwrap();
        assert_eq!(json["warningStockAmount"], 5);
        assert_eq!(json["monthIncrease"], "0%");
        assert_eq!(json["stock_measurement"], "individual");
        assert_eq!(json["expiry_date"], "2026-03-10");
    }

    #[test]
    fn test_menu_item_accepts_string_amounts_and_plural_category() {
        let json = r#"{
            "id": "r1",
            "name": "Bruschetta",
            "ingredients": [{"name": "Tomatoes", "units": "pcs", "amount": "2"}],
            "price": 8.5,
            "category": "Appetizers"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Appetizer);
        assert_eq!(item.ingredients[0].amount, Decimal::from(2));
        assert_eq!(item.orders, 0);
        assert_eq!(item.season, None);
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("Mains"), Some(Category::Entree));
        assert_eq!(Category::from_label(" desserts "), Some(Category::Dessert));
        assert_eq!(Category::from_label("Sides"), None);
    }
}
