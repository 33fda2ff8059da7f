//! Seed document parsing and import.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared_types::{
    Category, Ingredient, InventoryError, MenuIngredient, MenuItem, MenuItemId, Season, Sku,
    StockUnit, EXPIRY_DATE_FORMAT, ZERO_TREND,
};
use sl_01_ingredient_ledger::IngredientStore;
use sl_02_menu_catalog::MenuCatalogApi;
use thiserror::Error;
use tracing::{info, warn};

/// Seed import errors.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Seed import failed: {0}")]
    Store(#[from] InventoryError),
}

impl SeedError {
    /// True when the seed file does not exist.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, SeedError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// The whole seed document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub ingredients: Vec<SeedIngredient>,
    /// Recipes grouped by category label.
    #[serde(default)]
    pub recipes: BTreeMap<String, Vec<SeedRecipe>>,
}

/// Ingredient as written in the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedIngredient {
    #[serde(default, alias = "_id")]
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default, alias = "expiryDate")]
    pub expiry_date: String,
    #[serde(default, alias = "unit")]
    pub stock_measurement: Option<StockUnit>,
    #[serde(default, rename = "warningStockAmount", alias = "threshold")]
    pub warning_stock_amount: i64,
    #[serde(default)]
    pub orders: Option<u64>,
    #[serde(default, rename = "monthIncrease")]
    pub month_increase: Option<String>,
    #[serde(default, rename = "yearIncrease")]
    pub year_increase: Option<String>,
}

impl SeedIngredient {
    /// Builds the ledger record; a bad date becomes `today` and negative
    /// quantities become zero.
    ///
    /// Returns `None` for an entry without a SKU.
    pub fn into_record(self, today: NaiveDate) -> Option<Ingredient> {
        let sku = Sku::from(self.sku.trim());
        if sku.is_blank() {
            warn!(ingredient = %self.name, "Seed ingredient has no SKU; skipping");
            return None;
        }

        let expiry_date = match NaiveDate::parse_from_str(self.expiry_date.trim(), EXPIRY_DATE_FORMAT)
        {
            Ok(date) => date,
            Err(_) => {
                warn!(
                    ingredient = %self.name,
                    expiry_date = %self.expiry_date,
                    "Invalid expiry date in seed; using today"
                );
                today
            }
        };

        let stock = clamp_quantity(&sku, "stock", self.stock);
        let warning_stock_amount =
            clamp_quantity(&sku, "warningStockAmount", self.warning_stock_amount);

        Some(Ingredient {
            sku,
            name: self.name,
            stock,
            price: self.price,
            expiry_date,
            stock_measurement: self.stock_measurement.unwrap_or_default(),
            warning_stock_amount,
            orders: self.orders.unwrap_or(1),
            month_increase: self.month_increase.unwrap_or_else(|| ZERO_TREND.to_string()),
            year_increase: self.year_increase.unwrap_or_else(|| ZERO_TREND.to_string()),
        })
    }
}

fn clamp_quantity(sku: &Sku, field: &'static str, value: i64) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        warn!(sku = %sku, field, value, "Negative quantity in seed; using 0");
        0
    })
}

/// Recipe as written in the seed file. Its category comes from the group.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecipe {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<MenuIngredient>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub orders: u64,
}

impl SeedRecipe {
    pub fn into_item(self, category: Category) -> MenuItem {
        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(MenuItemId::from)
            .unwrap_or_else(MenuItemId::generate);

        MenuItem {
            id,
            name: self.name,
            ingredients: self.ingredients,
            price: self.price,
            category,
            description: self.description,
            season: self.season,
            orders: self.orders,
        }
    }
}

impl SeedDocument {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Flattens the category groups into menu items.
    ///
    /// Groups whose label is not a known category are skipped.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        let mut items = Vec::new();
        for (label, recipes) in &self.recipes {
            let Some(category) = Category::from_label(label) else {
                warn!(category = %label, count = recipes.len(), "Unknown recipe category in seed; skipping group");
                continue;
            };
            items.extend(recipes.iter().cloned().map(|r| r.into_item(category)));
        }
        items
    }
}

/// What a seed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Imported { ingredients: usize, menu_items: usize },
    /// At least one record set already held data.
    SkippedNonEmpty,
}

/// Imports a seed document into empty stores.
pub struct SeedLoader {
    ingredients: Arc<dyn IngredientStore>,
    menu: Arc<dyn MenuCatalogApi>,
}

impl SeedLoader {
    pub fn new(ingredients: Arc<dyn IngredientStore>, menu: Arc<dyn MenuCatalogApi>) -> Self {
        Self { ingredients, menu }
    }

    /// Reads `path` and imports it.
    pub async fn load_file(
        &self,
        path: impl AsRef<Path>,
        today: NaiveDate,
    ) -> Result<SeedOutcome, SeedError> {
        let document = SeedDocument::from_file(path).await?;
        self.import(document, today).await
    }

    /// Imports `document` if both record sets are empty.
    ///
    /// Records whose key already exists are skipped with a warning. Store
    /// failures abort the import; records inserted before them stay.
    pub async fn import(
        &self,
        document: SeedDocument,
        today: NaiveDate,
    ) -> Result<SeedOutcome, SeedError> {
        let ingredient_count = self.ingredients.count().await?;
        let menu_count = self.menu.list_menu_items().await?.len();
        if ingredient_count > 0 || menu_count > 0 {
            info!(
                ingredients = ingredient_count,
                menu_items = menu_count,
                "Store already contains data; skipping seed import"
            );
            return Ok(SeedOutcome::SkippedNonEmpty);
        }

        let menu_items = document.menu_items();

        let mut imported_ingredients = 0;
        for seed in document.ingredients {
            let Some(record) = seed.into_record(today) else {
                continue;
            };
            let sku = record.sku.clone();
            match self.ingredients.insert(record).await {
                Ok(()) => imported_ingredients += 1,
                Err(InventoryError::DuplicateKey { .. }) => {
                    warn!(sku = %sku, "Duplicate SKU in seed; keeping the first record");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let mut imported_items = 0;
        for item in menu_items {
            let id = item.id.clone();
            match self.menu.import_menu_item(item).await {
                Ok(_) => imported_items += 1,
                Err(InventoryError::DuplicateKey { .. }) => {
                    warn!(id = %id, "Duplicate recipe id in seed; keeping the first item");
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(
            ingredients = imported_ingredients,
            menu_items = imported_items,
            "Seed data imported"
        );
        Ok(SeedOutcome::Imported {
            ingredients: imported_ingredients,
            menu_items: imported_items,
        })
    }
}
