// src/models/product.rs
use std::fmt;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use tracing::info;

use super::category::Category;
use super::error::{DataValidationError, ModelError};
use super::json_type_name;
use super::price::{check_price, IntoPrice};
use crate::store::{ProductFilter, ProductStore};

const NAME_MAX_LEN: usize = 100;
const DESCRIPTION_MAX_LEN: usize = 250;

/// A catalog item.
///
/// Instances are detached copies of a stored row: `id` is `None` until
/// [`Product::create`] persists the product, and a copy may go stale once
/// the row is changed or deleted through another instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            price: Decimal::ZERO,
            available: true,
            category: Category::Unknown,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{id}]>", self.name),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            price,
            available,
            category,
        }
    }

    /// Checks the fields against the column constraints of the products table.
    pub fn validate(&self) -> Result<(), DataValidationError> {
        if self.name.trim().is_empty() {
            return Err(DataValidationError::invalid_value("name", "must not be empty"));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(DataValidationError::invalid_value(
                "name",
                format!("must be at most {NAME_MAX_LEN} characters"),
            ));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                return Err(DataValidationError::invalid_value(
                    "description",
                    format!("must be at most {DESCRIPTION_MAX_LEN} characters"),
                ));
            }
        }
        check_price(self.price)?;
        Ok(())
    }

    /// Persists a new product and assigns its id.
    ///
    /// Any id already on the instance is discarded; the store always hands out a fresh one.
    pub async fn create(&mut self, store: &dyn ProductStore) -> Result<i64, ModelError> {
        info!(name = %self.name, "Creating product");
        self.validate()?;
        self.id = None;
        let id = store.insert(self).await?;
        self.id = Some(id);
        Ok(id)
    }

    /// Writes the instance's fields to the row with the same id.
    pub async fn update(&self, store: &dyn ProductStore) -> Result<(), ModelError> {
        info!(product = %self, "Saving product");
        let id = self.id.ok_or(ModelError::EmptyId)?;
        self.validate()?;
        if !store.update(id, self).await? {
            return Err(ModelError::NotFound(id));
        }
        Ok(())
    }

    /// Removes the row with the instance's id. Returns whether a row was removed.
    pub async fn delete(&self, store: &dyn ProductStore) -> Result<bool, ModelError> {
        info!(product = %self, "Deleting product");
        let id = self.id.ok_or(ModelError::EmptyId)?;
        Ok(store.delete(id).await?)
    }

    /// Serializes the product into a JSON object keyed by field name.
    ///
    /// `price` is emitted as a string so no decimal precision is lost on the wire.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Fills the product from a JSON object.
    ///
    /// Every field is parsed before any is assigned, so on error the instance
    /// is left as it was. The `id` key is ignored.
    pub fn deserialize(&mut self, data: &Value) -> Result<&mut Self, DataValidationError> {
        let map = data
            .as_object()
            .ok_or(DataValidationError::Malformed(json_type_name(data)))?;

        let name = required_str(map, "name")?;
        let description = match map.get("description") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(DataValidationError::InvalidType {
                    field: "description",
                    expected: "string",
                    found: json_type_name(other),
                })
            }
        };
        let price = map
            .get("price")
            .ok_or(DataValidationError::MissingField("price"))?
            .into_price()?;
        let available = match map.get("available") {
            None => return Err(DataValidationError::MissingField("available")),
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(DataValidationError::InvalidType {
                    field: "available",
                    expected: "boolean",
                    found: json_type_name(other),
                })
            }
        };
        let category: Category = required_str(map, "category")?.parse()?;

        let candidate = Product {
            id: self.id,
            name: name.to_string(),
            description,
            price,
            available,
            category,
        };
        candidate.validate()?;

        *self = candidate;
        Ok(self)
    }

    pub async fn all(store: &dyn ProductStore) -> Result<Vec<Product>, ModelError> {
        info!("Processing all products");
        Ok(store.list(&ProductFilter::All).await?)
    }

    pub async fn find(store: &dyn ProductStore, id: i64) -> Result<Option<Product>, ModelError> {
        info!(id, "Processing lookup for id");
        Ok(store.find(id).await?)
    }

    /// Exact, case-sensitive match on name.
    pub async fn find_by_name(
        store: &dyn ProductStore,
        name: &str,
    ) -> Result<Vec<Product>, ModelError> {
        info!(name = %name, "Processing name query");
        Ok(store.list(&ProductFilter::Name(name.to_string())).await?)
    }

    pub async fn find_by_availability(
        store: &dyn ProductStore,
        available: bool,
    ) -> Result<Vec<Product>, ModelError> {
        info!(available, "Processing available query");
        Ok(store.list(&ProductFilter::Available(available)).await?)
    }

    pub async fn find_by_category(
        store: &dyn ProductStore,
        category: Category,
    ) -> Result<Vec<Product>, ModelError> {
        info!(%category, "Processing category query");
        Ok(store.list(&ProductFilter::Category(category)).await?)
    }

    /// Matches on price by decimal value, whatever form the price was given in.
    pub async fn find_by_price(
        store: &dyn ProductStore,
        price: impl IntoPrice,
    ) -> Result<Vec<Product>, ModelError> {
        let price = price.into_price()?;
        info!(%price, "Processing price query");
        Ok(store.list(&ProductFilter::Price(price)).await?)
    }
}

fn required_str<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, DataValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(DataValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(DataValidationError::InvalidType {
            field,
            expected: "string",
            found: json_type_name(other),
        }),
    }
}
