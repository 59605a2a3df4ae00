// src/store/postgres.rs
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{error, instrument};

use super::{ProductFilter, ProductStore, StoreError};
use crate::models::{Category, Product};

const SELECT_PRODUCTS: &str =
    "SELECT id, name, description, price, available, category FROM products";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: Decimal,
    available: bool,
    category: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category: Category = row.category.parse().map_err(|e| StoreError::Corrupt {
            id: row.id,
            reason: format!("{e}"),
        })?;

        Ok(Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            available: row.available,
            category,
        })
    }
}

/// PostgreSQL-backed store over the `products` table.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn insert(&self, product: &Product) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO products (name, description, price, available, category)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.description.as_deref())
        .bind(product.price)
        .bind(product.available)
        .bind(product.category.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(?e, "Failed to insert product");
            e
        })?;

        Ok(id)
    }

    #[instrument(skip(self, product))]
    async fn update(&self, id: i64, product: &Product) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE products SET
             name = $1,
             description = $2,
             price = $3,
             available = $4,
             category = $5
             WHERE id = $6",
        )
        .bind(&product.name)
        .bind(product.description.as_deref())
        .bind(product.price)
        .bind(product.available)
        .bind(product.category.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCTS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_PRODUCTS);
        match filter {
            ProductFilter::All => {}
            ProductFilter::Name(name) => {
                query.push(" WHERE name = ").push_bind(name.clone());
            }
            ProductFilter::Available(available) => {
                query.push(" WHERE available = ").push_bind(*available);
            }
            ProductFilter::Category(category) => {
                query.push(" WHERE category = ").push_bind(category.as_str());
            }
            ProductFilter::Price(price) => {
                query.push(" WHERE price = ").push_bind(*price);
            }
        }
        query.push(" ORDER BY id");

        let rows = query
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(?e, "Failed to fetch products");
                e
            })?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM products").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
