//! Storage handle for products.
//!
//! The model layer only talks to [`ProductStore`]; the process picks one
//! backend at startup and injects it through `AppState`.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::database;
use crate::models::{Category, Product};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// `DATABASE_URI` prefix that selects [`MemoryProductStore`].
pub const MEMORY_URI_PREFIX: &str = "memory:";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be mapped back to a product.
    #[error("corrupt product row {id}: {reason}")]
    Corrupt { id: i64, reason: String },

    #[error("store lock poisoned")]
    Poisoned,
}

/// Single-field selection over the products table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductFilter {
    #[default]
    All,
    Name(String),
    Available(bool),
    Category(Category),
    Price(Decimal),
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Name(name) => product.name == *name,
            ProductFilter::Available(available) => product.available == *available,
            ProductFilter::Category(category) => product.category == *category,
            ProductFilter::Price(price) => product.price == *price,
        }
    }
}

/// Row-level persistence for products.
///
/// Lists are ordered by ascending id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a new row and returns the id assigned to it. The product's own id is ignored.
    async fn insert(&self, product: &Product) -> Result<i64, StoreError>;

    /// Overwrites the row with `id`. Returns `false` when no such row exists.
    async fn update(&self, id: i64, product: &Product) -> Result<bool, StoreError>;

    /// Removes the row with `id`. Returns `false` when no such row exists.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Product>, StoreError>;

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;

    /// Removes every row, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;
}

/// Opens the backend named by `config.database_uri`.
pub async fn connect(config: &Config) -> Result<Arc<dyn ProductStore>, StoreError> {
    if config.database_uri.starts_with(MEMORY_URI_PREFIX) {
        info!("Using in-memory product store");
        return Ok(Arc::new(MemoryProductStore::new()));
    }

    let pool = database::create_pool(config).await?;
    database::init_db(&pool).await?;
    info!("Connected to PostgreSQL product store");
    Ok(Arc::new(PgProductStore::new(pool)))
}
