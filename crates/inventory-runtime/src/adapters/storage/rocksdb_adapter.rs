//! # RocksDB Storage Adapter
//!
//! Persistent implementation of `IngredientStore` and `MenuItemStore`.
//!
//! ## Column Families
//!
//! - `ingredients` - ingredient records keyed by SKU
//! - `menu_items` - menu items keyed by id
//!
//! Values are JSON-encoded records. Every write, including each
//! read-modify-write, runs under one process-wide write mutex so `insert`
//! and `update` stay atomic per record.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, IteratorMode, Options, WriteBatch, DB};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{Ingredient, InventoryError, InventoryResult, MenuItem, MenuItemId, Sku};
use sl_01_ingredient_ledger::{IngredientMutation, IngredientStore};
use sl_02_menu_catalog::{MenuItemMutation, MenuItemStore};

/// Column family names, one per record set
pub const CF_INGREDIENTS: &str = "ingredients";
pub const CF_MENU_ITEMS: &str = "menu_items";

/// All column families used by the runtime
pub const COLUMN_FAMILIES: &[&str] = &[CF_INGREDIENTS, CF_MENU_ITEMS];

/// RocksDB configuration
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: PathBuf,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 16MB)
    pub write_buffer_size: usize,
    /// Enable fsync after each write (default: true for durability)
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/shelf-life"),
            block_cache_size: 64 * 1024 * 1024,
            write_buffer_size: 16 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create config for testing (smaller buffers, no sync)
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 8 * 1024 * 1024,
            write_buffer_size: 4 * 1024 * 1024,
            sync_writes: false,
        }
    }
}

/// Shared RocksDB handle for both record sets.
pub struct RocksDbStore {
    db: DB,
    config: RocksDbConfig,
    write_lock: Mutex<()>,
}

impl RocksDbStore {
    /// Open or create the database with every column family.
    pub fn open(config: RocksDbConfig) -> InventoryResult<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let cf_descriptors: Vec<ColumnFamilyDescriptor> = COLUMN_FAMILIES
            .iter()
            .map(|name| {
                let mut cf_opts = Options::default();
                cf_opts.set_compression_type(rocksdb::DBCompressionType::Snappy);
                ColumnFamilyDescriptor::new(*name, cf_opts)
            })
            .collect();

        let db = DB::open_cf_descriptors(&opts, &config.path, cf_descriptors).map_err(|e| {
            InventoryError::StoreUnavailable(format!(
                "Failed to open RocksDB at {}: {}",
                config.path.display(),
                e
            ))
        })?;

        Ok(Self {
            db,
            config,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn cf(&self, name: &str) -> InventoryResult<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            InventoryError::StoreUnavailable(format!("missing column family {}", name))
        })
    }

    fn write_opts(&self) -> rocksdb::WriteOptions {
        let mut opts = rocksdb::WriteOptions::default();
        opts.set_sync(self.config.sync_writes);
        opts
    }

    fn ping(&self) -> InventoryResult<()> {
        for name in COLUMN_FAMILIES {
            let cf = self.cf(name)?;
            self.db.get_cf(cf, b"").map_err(io_error("ping"))?;
        }
        Ok(())
    }

    fn get<T: DeserializeOwned>(&self, cf: &str, key: &str) -> InventoryResult<Option<T>> {
        let cf = self.cf(cf)?;
        match self.db.get_cf(cf, key.as_bytes()).map_err(io_error("get"))? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn scan<T: DeserializeOwned>(&self, cf: &str) -> InventoryResult<Vec<T>> {
        let cf = self.cf(cf)?;
        let mut results = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_, value) = item.map_err(io_error("scan"))?;
            results.push(decode(&value)?);
        }
        Ok(results)
    }

    fn count(&self, cf: &str) -> InventoryResult<usize> {
        let cf = self.cf(cf)?;
        let mut count = 0;
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            item.map_err(io_error("count"))?;
            count += 1;
        }
        Ok(count)
    }

    fn put<T: Serialize>(&self, cf: &ColumnFamily, key: &str, value: &T) -> InventoryResult<()> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| InventoryError::Serialization(e.to_string()))?;
        self.db
            .put_cf_opt(cf, key.as_bytes(), bytes, &self.write_opts())
            .map_err(io_error("put"))
    }

    /// Check-and-insert under the write mutex.
    fn insert<T: Serialize>(
        &self,
        cf: &str,
        key: &str,
        value: &T,
        duplicate: impl FnOnce() -> InventoryError,
    ) -> InventoryResult<()> {
        let _guard = self.write_lock.lock();
        let handle = self.cf(cf)?;
        if self
            .db
            .get_pinned_cf(handle, key.as_bytes())
            .map_err(io_error("get"))?
            .is_some()
        {
            return Err(duplicate());
        }
        self.put(handle, key, value)
    }

    /// Read-modify-write under the write mutex.
    fn modify<T, F>(
        &self,
        cf: &str,
        key: &str,
        missing: impl FnOnce() -> InventoryError,
        apply: F,
    ) -> InventoryResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let _guard = self.write_lock.lock();
        let handle = self.cf(cf)?;
        let bytes = self
            .db
            .get_cf(handle, key.as_bytes())
            .map_err(io_error("get"))?
            .ok_or_else(missing)?;
        let mut record: T = decode(&bytes)?;
        apply(&mut record);
        self.put(handle, key, &record)?;
        Ok(record)
    }

    fn delete(&self, cf: &str, key: &str) -> InventoryResult<bool> {
        let _guard = self.write_lock.lock();
        let handle = self.cf(cf)?;
        let existed = self
            .db
            .get_pinned_cf(handle, key.as_bytes())
            .map_err(io_error("get"))?
            .is_some();
        if existed {
            self.db
                .delete_cf_opt(handle, key.as_bytes(), &self.write_opts())
                .map_err(io_error("delete"))?;
        }
        Ok(existed)
    }

    fn clear(&self, cf: &str) -> InventoryResult<()> {
        let _guard = self.write_lock.lock();
        let handle = self.cf(cf)?;
        let mut batch = WriteBatch::default();
        for item in self.db.iterator_cf(handle, IteratorMode::Start) {
            let (key, _) = item.map_err(io_error("scan"))?;
            batch.delete_cf(handle, key);
        }
        self.db
            .write_opt(batch, &self.write_opts())
            .map_err(io_error("batch delete"))
    }
}

fn io_error(op: &'static str) -> impl Fn(rocksdb::Error) -> InventoryError {
    move |e| InventoryError::StoreUnavailable(format!("RocksDB {} failed: {}", op, e))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> InventoryResult<T> {
    serde_json::from_slice(bytes).map_err(|e| InventoryError::Serialization(e.to_string()))
}

/// `IngredientStore` over the `ingredients` column family.
#[derive(Clone)]
pub struct RocksDbIngredientStore {
    store: Arc<RocksDbStore>,
}

impl RocksDbIngredientStore {
    pub fn new(store: Arc<RocksDbStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IngredientStore for RocksDbIngredientStore {
    async fn ping(&self) -> InventoryResult<()> {
        self.store.ping()
    }

    async fn insert(&self, record: Ingredient) -> InventoryResult<()> {
        let sku = record.sku.clone();
        self.store.insert(CF_INGREDIENTS, sku.as_str(), &record, || {
            InventoryError::duplicate_ingredient(sku.as_str())
        })
    }

    async fn get(&self, sku: &Sku) -> InventoryResult<Option<Ingredient>> {
        self.store.get(CF_INGREDIENTS, sku.as_str())
    }

    async fn find_by_name(&self, name: &str) -> InventoryResult<Vec<Ingredient>> {
        // Keys iterate in byte order, so matches come out sorted by SKU.
        let records: Vec<Ingredient> = self.store.scan(CF_INGREDIENTS)?;
        Ok(records.into_iter().filter(|r| r.name == name).collect())
    }

    async fn list(&self) -> InventoryResult<Vec<Ingredient>> {
        self.store.scan(CF_INGREDIENTS)
    }

    async fn update(
        &self,
        sku: &Sku,
        mutation: &IngredientMutation,
    ) -> InventoryResult<Ingredient> {
        self.store.modify(
            CF_INGREDIENTS,
            sku.as_str(),
            || InventoryError::ingredient_not_found(sku.as_str()),
            |record| mutation.apply(record),
        )
    }

    async fn delete(&self, sku: &Sku) -> InventoryResult<bool> {
        self.store.delete(CF_INGREDIENTS, sku.as_str())
    }

    async fn count(&self) -> InventoryResult<usize> {
        self.store.count(CF_INGREDIENTS)
    }

    async fn clear(&self) -> InventoryResult<()> {
        self.store.clear(CF_INGREDIENTS)
    }
}

/// `MenuItemStore` over the `menu_items` column family.
#[derive(Clone)]
pub struct RocksDbMenuItemStore {
    store: Arc<RocksDbStore>,
}

impl RocksDbMenuItemStore {
    pub fn new(store: Arc<RocksDbStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MenuItemStore for RocksDbMenuItemStore {
    async fn ping(&self) -> InventoryResult<()> {
        self.store.ping()
    }

    async fn insert(&self, item: MenuItem) -> InventoryResult<()> {
        let id = item.id.clone();
        self.store.insert(CF_MENU_ITEMS, id.as_str(), &item, || {
            InventoryError::duplicate_menu_item(id.as_str())
        })
    }

    async fn get(&self, id: &MenuItemId) -> InventoryResult<Option<MenuItem>> {
        self.store.get(CF_MENU_ITEMS, id.as_str())
    }

    async fn list(&self) -> InventoryResult<Vec<MenuItem>> {
        self.store.scan(CF_MENU_ITEMS)
    }

    async fn update(
        &self,
        id: &MenuItemId,
        mutation: &MenuItemMutation,
    ) -> InventoryResult<MenuItem> {
        self.store.modify(
            CF_MENU_ITEMS,
            id.as_str(),
            || InventoryError::menu_item_not_found(id.as_str()),
            |item| mutation.apply(item),
        )
    }

    async fn delete(&self, id: &MenuItemId) -> InventoryResult<bool> {
        self.store.delete(CF_MENU_ITEMS, id.as_str())
    }

    async fn count(&self) -> InventoryResult<usize> {
        self.store.count(CF_MENU_ITEMS)
    }

    async fn clear(&self) -> InventoryResult<()> {
        self.store.clear(CF_MENU_ITEMS)
    }
}
