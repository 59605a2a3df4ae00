pub mod products;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::health::{health_check, index, method_not_allowed, not_found};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().merge(products::routes())
}

/// The full application: resource routes, index and health pages, JSON
/// fallbacks and middleware, bound to `state`.
pub fn build_app(state: AppState) -> Router {
    create_router()
        .route("/", get(index))
        .route("/health", get(health_check))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
