use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{ProductFilter, ProductStore, StoreError};
use crate::models::Product;

#[derive(Debug)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

impl Default for Inner {
    fn default() -> Self {
        // 0 is never handed out, like a BIGSERIAL column.
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// In-process product store.
///
/// Intended for tests/dev. Rows live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: &Product) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.insert(
            id,
            Product {
                id: Some(id),
                ..product.clone()
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i64, product: &Product) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = Product {
                    id: Some(id),
                    ..product.clone()
                };
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .rows
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let removed = inner.rows.len() as u64;
        inner.rows.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rust_decimal::Decimal;

    fn product(name: &str) -> Product {
        Product::new(name, None, Decimal::new(500, 2), true, Category::Food)
    }

    #[tokio::test]
    async fn ids_start_at_one_and_are_not_reused() {
        let store = MemoryProductStore::new();
        let first = store.insert(&product("Apple")).await.unwrap();
        assert_eq!(first, 1);
        assert!(store.delete(first).await.unwrap());
        let second = store.insert(&product("Banana")).await.unwrap();
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn insert_ignores_incoming_id() {
        let store = MemoryProductStore::new();
        let mut apple = product("Apple");
        apple.id = Some(42);
        let id = store.insert(&apple).await.unwrap();
        assert_eq!(id, 1);
        assert!(store.find(42).await.unwrap().is_none());
        assert_eq!(store.find(1).await.unwrap().unwrap().id, Some(1));
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let store = MemoryProductStore::new();
        assert!(!store.update(5, &product("Apple")).await.unwrap());
        assert!(!store.delete(5).await.unwrap());
    }

    #[tokio::test]
    async fn delete_all_empties_the_store() {
        let store = MemoryProductStore::new();
        for name in ["Apple", "Banana", "Cherry"] {
            store.insert(&product(name)).await.unwrap();
        }
        assert_eq!(store.delete_all().await.unwrap(), 3);
        assert!(store.list(&ProductFilter::All).await.unwrap().is_empty());
    }
}
