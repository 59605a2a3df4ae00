// src/handlers/health.rs
use axum::{response::Html, Json};
use serde_json::{json, Value};

use crate::error::AppError;

const INDEX_PAGE: &str = include_str!("../../static/index.html");

// GET / - Administration page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

// GET /health - Liveness check, never touches storage
pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}

pub async fn not_found() -> AppError {
    AppError::not_found("The requested URL was not found on the server.")
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
