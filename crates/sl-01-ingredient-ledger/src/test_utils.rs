use chrono::NaiveDate;
use shared_types::{Ingredient, Sku, StockUnit, ZERO_TREND};

use crate::domain::IngredientDraft;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ingredient(sku: &str, name: &str, stock: u64, threshold: u64) -> Ingredient {
    Ingredient {
        sku: Sku::from(sku),
        name: name.to_string(),
        stock,
        price: None,
        expiry_date: date(2026, 11, 1),
        stock_measurement: StockUnit::Individual,
        warning_stock_amount: threshold,
        orders: 1,
        month_increase: ZERO_TREND.to_string(),
        year_increase: ZERO_TREND.to_string(),
    }
}

pub fn draft(sku: &str, name: &str, stock: i64, threshold: i64, expiry: &str) -> IngredientDraft {
    IngredientDraft {
        sku: sku.to_string(),
        name: name.to_string(),
        stock,
        price: None,
        expiry_date: expiry.to_string(),
        unit: "individual".to_string(),
        custom_unit: None,
        threshold,
    }
}
