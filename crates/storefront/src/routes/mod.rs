//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (filter/sort/search)
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a line (size and color required)
//! POST /cart/update            - Set a line quantity (floor 1)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! POST /cart/coupon            - Coupon input (accepted, never applied)
//!
//! # Checkout wizard
//! GET  /checkout               - Render the current step
//! POST /checkout/shipping      - Step 1 -> 2
//! POST /checkout/back          - Step 2 -> 1
//! POST /checkout/payment       - Step 2 -> (simulated delay) -> 3
//!
//! # Orders
//! GET  /orders                 - Order history (?status= tab, ?expand=)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/coupon", post(cart::coupon))
}

/// Create the checkout wizard router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/shipping", post(checkout::submit_shipping))
        .route("/back", post(checkout::back))
        .route("/payment", post(checkout::submit_payment))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout wizard
        .nest("/checkout", checkout_routes())
        // Order history
        .route("/orders", get(orders::index))
}
