//! HTTP route handlers for the admin.
//!
//! ```text
//! GET  /                         - Redirect to the product table
//! GET  /health                   - Health check
//! GET  /products                 - Product table (?q= name search)
//! POST /products/{id}/delete     - Delete a product row
//! ```

pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/products") }))
        .route("/products", get(products::index))
        .route("/products/{id}/delete", post(products::delete))
}
