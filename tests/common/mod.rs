#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use product_catalog::models::{Category, Product};
use product_catalog::store::{MemoryProductStore, ProductStore};
use product_catalog::{build_app, AppState};
use rust_decimal::Decimal;
use serde_json::Value;

pub const BASE_URL: &str = "/products";

const CATALOG: [(&str, &str, Category); 8] = [
    ("Hat", "A red fedora", Category::Cloths),
    ("Pants", "Blue jeans", Category::Cloths),
    ("Apple", "Granny smith", Category::Food),
    ("Banana", "Ripe and yellow", Category::Food),
    ("Pots", "Set of three", Category::Housewares),
    ("Tires", "All season", Category::Automotive),
    ("Hammer", "Claw hammer", Category::Tools),
    ("Shirt", "Plain white tee", Category::Cloths),
];

/// Deterministic stand-in for a fake-data factory.
///
/// Names repeat every eight seeds and every third product is unavailable,
/// so filters always select a proper, non-empty subset of ten products.
pub fn sample_product(seed: usize) -> Product {
    let (name, description, category) = CATALOG[seed % CATALOG.len()];
    let cents = 100 + (seed as i64 * 1_379) % 90_000;
    Product::new(
        name,
        Some(description.to_string()),
        Decimal::new(cents, 2),
        seed % 3 != 0,
        category,
    )
}

pub fn memory_app() -> (Router, Arc<MemoryProductStore>) {
    let store = Arc::new(MemoryProductStore::new());
    let shared: Arc<dyn ProductStore> = store.clone();
    (build_app(AppState::new(shared)), store)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}
