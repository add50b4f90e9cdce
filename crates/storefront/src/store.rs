//! In-memory application store.
//!
//! The explicit state container for the whole storefront: catalog, cart,
//! checkout session and order history live here, seeded from the mock
//! fixtures and shared across handlers behind the state's `RwLock`.
//! Nothing is persisted; a restart resets the shop.

use chrono::Utc;
use stride_core::cart::Cart;
use stride_core::catalog::{CategoryTile, Product};
use stride_core::order::Order;
use stride_core::seed;
use stride_core::{LineId, ProductId};
use thiserror::Error;

use crate::checkout::CheckoutSession;
use crate::payment::PaymentReceipt;

/// Errors from store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("not enough stock for {name}: {requested} requested, {available} available")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },
}

/// The in-memory store backing every page.
#[derive(Debug)]
pub struct Store {
    products: Vec<Product>,
    category_tiles: Vec<CategoryTile>,
    pub cart: Cart,
    pub checkout: CheckoutSession,
    orders: Vec<Order>,
}

impl Store {
    /// Build a store from the mock seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: seed::catalog(),
            category_tiles: seed::category_tiles(),
            cart: seed::cart(),
            checkout: CheckoutSession::new(),
            orders: seed::order_history(),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` for unknown IDs.
    pub fn product(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))
    }

    /// Products carrying the featured flag, in catalog order.
    #[must_use]
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    #[must_use]
    pub fn category_tiles(&self) -> &[CategoryTile] {
        &self.category_tiles
    }

    /// Order history, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Add a product to the cart in the given size and color.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` for unknown IDs; `InsufficientStock` when the
    /// requested quantity exceeds what is on hand.
    pub fn add_to_cart(
        &mut self,
        product_id: ProductId,
        size: &str,
        color: &str,
        quantity: u32,
    ) -> Result<LineId, StoreError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(StoreError::ProductNotFound(product_id))?;

        if quantity > product.stock_quantity {
            return Err(StoreError::InsufficientStock {
                name: product.name.clone(),
                requested: quantity,
                available: product.stock_quantity,
            });
        }

        let product = product.clone();
        Ok(self.cart.add(&product, size, color, quantity))
    }

    /// Turn the current cart into a placed order using the gateway
    /// receipt: stock is decremented, the order is prepended to the
    /// history and the cart is cleared.
    pub fn place_order(&mut self, receipt: &PaymentReceipt) -> Order {
        for line in self.cart.items() {
            if let Some(product) = self.products.iter_mut().find(|p| p.id == line.product_id) {
                product.stock_quantity = product.stock_quantity.saturating_sub(line.quantity);
            }
        }

        let order = Order::from_cart(
            receipt.order_number.clone(),
            Utc::now().date_naive(),
            receipt.payment_method,
            receipt.total,
            self.cart.items(),
        );
        self.orders.insert(0, order.clone());
        self.cart.clear();
        order
    }

    /// Remove a product from the catalog. Used by the admin surface.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` for unknown IDs.
    pub fn remove_product(&mut self, id: ProductId) -> Result<(), StoreError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StoreError::ProductNotFound(id));
        }
        Ok(())
    }
}
