//! In-memory `IngredientStore`.
//!
//! Default backend for the runtime and the store used in tests. A single
//! `RwLock` guards the map, so `update` holds the write lock across the
//! whole read-modify-write.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Ingredient, InventoryError, InventoryResult, Sku};

use crate::domain::IngredientMutation;
use crate::ports::IngredientStore;

#[derive(Debug, Default)]
pub struct InMemoryIngredientStore {
    records: RwLock<HashMap<Sku, Ingredient>>,
}

impl InMemoryIngredientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`. Later duplicates overwrite earlier
    /// ones.
    pub fn with_records(records: impl IntoIterator<Item = Ingredient>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.sku.clone(), r))
            .collect::<HashMap<_, _>>();
        Self {
            records: RwLock::new(map),
        }
    }
}

#[async_trait]
impl IngredientStore for InMemoryIngredientStore {
    async fn ping(&self) -> InventoryResult<()> {
        Ok(())
    }

    async fn insert(&self, record: Ingredient) -> InventoryResult<()> {
        let mut records = self.records.write();
        if records.contains_key(&record.sku) {
            return Err(InventoryError::duplicate_ingredient(record.sku.as_str()));
        }
        records.insert(record.sku.clone(), record);
        Ok(())
    }

    async fn get(&self, sku: &Sku) -> InventoryResult<Option<Ingredient>> {
        Ok(self.records.read().get(sku).cloned())
    }

    async fn find_by_name(&self, name: &str) -> InventoryResult<Vec<Ingredient>> {
        let mut matches: Vec<Ingredient> = self
            .records
            .read()
            .values()
            .filter(|r| r.name == name)
            .cloned()
            .collect();
        // HashMap order is random; keep "first match" stable.
        matches.sort_by(|a, b| a.sku.cmp(&b.sku));
        Ok(matches)
    }

    async fn list(&self) -> InventoryResult<Vec<Ingredient>> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn update(
        &self,
        sku: &Sku,
        mutation: &IngredientMutation,
    ) -> InventoryResult<Ingredient> {
        let mut records = self.records.write();
        let record = records
            .get_mut(sku)
            .ok_or_else(|| InventoryError::ingredient_not_found(sku.as_str()))?;
        mutation.apply(record);
        Ok(record.clone())
    }

    async fn delete(&self, sku: &Sku) -> InventoryResult<bool> {
        Ok(self.records.write().remove(sku).is_some())
    }

    async fn count(&self) -> InventoryResult<usize> {
        Ok(self.records.read().len())
    }

    async fn clear(&self) -> InventoryResult<()> {
        self.records.write().clear();
        Ok(())
    }
}
