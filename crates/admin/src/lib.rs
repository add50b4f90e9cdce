//! Stride Admin library.
//!
//! The back-office counterpart to the storefront: a single product table
//! over the same mock catalog, with name search and row deletion. Exposed
//! as a library so the router can be exercised in tests without binding a
//! socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Build the complete admin application.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/admin/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
