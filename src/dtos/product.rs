// src/dtos/product.rs
use serde::Deserialize;

use crate::models::{Category, DataValidationError, IntoPrice};
use crate::store::ProductFilter;

/// Query string accepted by `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<String>,
    pub price: Option<String>,
}

impl ListProductsQuery {
    /// Picks the single filter to apply. Precedence is name, category,
    /// available, then price; empty values count as absent.
    pub fn filter(&self) -> Result<ProductFilter, DataValidationError> {
        if let Some(name) = non_empty(self.name.as_deref()) {
            return Ok(ProductFilter::Name(name.to_string()));
        }
        if let Some(category) = non_empty(self.category.as_deref()) {
            return Ok(ProductFilter::Category(Category::parse_ignore_case(category)?));
        }
        if let Some(available) = non_empty(self.available.as_deref()) {
            return Ok(ProductFilter::Available(parse_flag(available)?));
        }
        if let Some(price) = non_empty(self.price.as_deref()) {
            return Ok(ProductFilter::Price(price.into_price()?));
        }
        Ok(ProductFilter::All)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool, DataValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(DataValidationError::invalid_value(
            "available",
            format!("'{value}' is not a boolean"),
        )),
    }
}
