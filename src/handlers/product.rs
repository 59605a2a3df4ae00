// src/handlers/product.rs
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap, HeaderName, StatusCode},
    Json,
};
use serde_json::Value;
use tracing::{info, instrument};

use crate::dtos::product::ListProductsQuery;
use crate::error::AppError;
use crate::models::Product;
use crate::state::AppState;
use crate::store::{ProductFilter, ProductStore};

fn product_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Product with id '{id}' was not found."))
}

/// Absolute URL of a product, built from the request's `Host` header when present.
fn product_location(headers: &HeaderMap, id: i64) -> String {
    let path = format!("/products/{id}");
    let Some(host) = headers.get(header::HOST).and_then(|h| h.to_str().ok()) else {
        return path;
    };
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}{path}")
}

async fn fetch_product(store: &dyn ProductStore, id: i64) -> Result<Product, AppError> {
    Product::find(store, id)
        .await?
        .ok_or_else(|| product_not_found(id))
}

// GET /products - List products, optionally filtered by name, category, available or price
#[instrument(skip(store))]
pub async fn list_products(
    State(AppState { store }): State<AppState>,
    Query(params): Query<ListProductsQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let store = store.as_ref();
    let products = match params.filter()? {
        ProductFilter::All => Product::all(store).await?,
        ProductFilter::Name(name) => Product::find_by_name(store, &name).await?,
        ProductFilter::Category(category) => Product::find_by_category(store, category).await?,
        ProductFilter::Available(available) => {
            Product::find_by_availability(store, available).await?
        }
        ProductFilter::Price(price) => Product::find_by_price(store, price).await?,
    };

    info!(count = products.len(), "Returning products");
    Ok(Json(products.iter().map(Product::serialize).collect()))
}

// GET /products/{id} - Get single product
#[instrument(skip(store, path))]
pub async fn get_product(
    path: Result<Path<i64>, PathRejection>,
    State(AppState { store }): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let product = fetch_product(store.as_ref(), id).await?;
    Ok(Json(product.serialize()))
}

// POST /products - Create new product
#[instrument(skip(store, headers, payload))]
pub async fn create_product(
    State(AppState { store }): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Value>), AppError> {
    let Json(data) = payload?;

    let mut product = Product::default();
    product.deserialize(&data)?;
    let id = product.create(store.as_ref()).await?;
    info!(id, "Product created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, product_location(&headers, id))],
        Json(product.serialize()),
    ))
}

// PUT /products/{id} - Update product
#[instrument(skip(store, path, payload))]
pub async fn update_product(
    path: Result<Path<i64>, PathRejection>,
    State(AppState { store }): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let Json(data) = payload?;

    let mut product = fetch_product(store.as_ref(), id).await?;
    product.deserialize(&data)?;
    product.id = Some(id);
    product.update(store.as_ref()).await?;

    Ok(Json(product.serialize()))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(store, path))]
pub async fn delete_product(
    path: Result<Path<i64>, PathRejection>,
    State(AppState { store }): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let product = fetch_product(store.as_ref(), id).await?;
    product.delete(store.as_ref()).await?;

    Ok(StatusCode::NO_CONTENT)
}
