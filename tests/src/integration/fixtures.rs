//! Shared fixtures: a runtime container over in-memory stores and a pinned
//! business date.

use std::sync::Arc;

use chrono::NaiveDate;
use inventory_runtime::container::{RuntimeConfig, ServiceContainer};
use rust_decimal::Decimal;
use shared_types::{Category, MenuIngredient};
use sl_01_ingredient_ledger::{FixedClock, InMemoryIngredientStore, IngredientDraft, ResupplyEntry};
use sl_02_menu_catalog::{InMemoryMenuItemStore, MenuItemDraft};

/// Business date every fixture runs on.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid fixture date")
}

/// Container wired exactly like the runtime, on empty in-memory stores.
pub fn container() -> ServiceContainer {
    ServiceContainer::with_stores(
        RuntimeConfig::default(),
        Arc::new(InMemoryIngredientStore::new()),
        Arc::new(InMemoryMenuItemStore::new()),
        Arc::new(FixedClock(today())),
    )
}

pub fn ingredient(sku: &str, name: &str, stock: i64, threshold: i64) -> IngredientDraft {
    IngredientDraft {
        sku: sku.to_string(),
        name: name.to_string(),
        stock,
        price: Some(Decimal::new(150, 2)),
        expiry_date: "2026-11-01".to_string(),
        unit: "individual".to_string(),
        custom_unit: None,
        threshold,
    }
}

pub fn delivery(sku: &str, stock: i64) -> ResupplyEntry {
    ResupplyEntry {
        sku: sku.to_string(),
        stock,
        ..Default::default()
    }
}

/// Recipe draft from `(ingredient name, amount per order)` lines.
pub fn recipe(name: &str, lines: &[(&str, Decimal)]) -> MenuItemDraft {
    MenuItemDraft {
        name: name.to_string(),
        ingredients: lines
            .iter()
            .map(|(ingredient, amount)| MenuIngredient {
                name: ingredient.to_string(),
                amount: *amount,
                units: None,
            })
            .collect(),
        price: Decimal::new(1000, 2),
        category: Category::Entree,
        description: None,
        season: None,
    }
}
