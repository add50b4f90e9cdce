//! Shopping cart lines and total derivation.
//!
//! Totals are a pure function of the cart contents and are recomputed on
//! every request: `subtotal + flat shipping + 8% tax`. There is no
//! currency-rounding policy beyond two-decimal display formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{LineId, Price, ProductId};

/// Flat shipping charge applied to every order.
pub const SHIPPING_FLAT: Price = Price::from_cents(1_000);

/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// One line in the cart: a product in a chosen size and color, with a
/// price snapshot taken at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub line_id: LineId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub size: String,
    pub color: String,
    /// Never below 1; the UI floors decrements instead of erroring.
    pub quantity: u32,
    pub image_url: String,
}

impl CartItem {
    /// Line total: price snapshot times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Derived cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

/// The shopping cart. Lines with the same (product, size, color) merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    next_line_id: i32,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (the navbar badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    #[must_use]
    pub fn find(&self, line_id: LineId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.line_id == line_id)
    }

    /// Add `quantity` units of a product in the given size and color.
    ///
    /// If an identical (product, size, color) line already exists its
    /// quantity is increased instead of creating a duplicate line.
    /// Returns the affected line's ID. Quantities of 0 are bumped to 1.
    pub fn add(&mut self, product: &Product, size: &str, color: &str, quantity: u32) -> LineId {
        let quantity = quantity.max(1);
        if let Some(existing) = self.items.iter_mut().find(|item| {
            item.product_id == product.id && item.size == size && item.color == color
        }) {
            existing.quantity += quantity;
            return existing.line_id;
        }

        self.next_line_id += 1;
        let line_id = LineId::new(self.next_line_id);
        self.items.push(CartItem {
            line_id,
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            size: size.to_owned(),
            color: color.to_owned(),
            quantity,
            image_url: product.image_url.clone(),
        });
        line_id
    }

    /// Restore a seeded line verbatim (mock data only).
    pub fn push_seed_line(&mut self, mut item: CartItem) {
        self.next_line_id += 1;
        item.line_id = LineId::new(self.next_line_id);
        item.quantity = item.quantity.max(1);
        self.items.push(item);
    }

    /// Set a line's quantity. Quantities below 1 are a no-op (the floor
    /// invariant), as is an unknown line ID.
    pub fn set_quantity(&mut self, line_id: LineId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.line_id == line_id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line. Unknown IDs are a no-op.
    pub fn remove(&mut self, line_id: LineId) {
        self.items.retain(|item| item.line_id != line_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Derive subtotal, shipping, tax and total from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal: Price = self.items.iter().map(CartItem::line_total).sum();
        let tax = subtotal.scale_by(TAX_RATE);
        CartTotals {
            subtotal,
            shipping: SHIPPING_FLAT,
            tax,
            total: subtotal + SHIPPING_FLAT + tax,
        }
    }
}
