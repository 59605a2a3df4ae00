//! Product catalog REST service.
//!
//! [`models::Product`] carries validation, JSON mapping and data-access
//! operations over an injected [`store::ProductStore`]; the route layer in
//! [`routes`] and [`handlers`] maps HTTP requests onto those operations.

pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::build_app;
pub use state::AppState;
