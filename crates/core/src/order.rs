//! Immutable order records for the order history page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::types::{OrderNumber, OrderStatus, PaymentMethod, Price, ProductId};

/// One product entry within an order, with its price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub image_url: String,
}

impl OrderLineItem {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A placed order. Status is immutable: the history page only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub number: OrderNumber,
    pub placed_on: NaiveDate,
    pub total: Price,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderLineItem>,
}

impl Order {
    /// Build an order from checkout: cart lines become order line items,
    /// the status starts at `Processing`.
    #[must_use]
    pub fn from_cart(
        number: OrderNumber,
        placed_on: NaiveDate,
        payment_method: PaymentMethod,
        total: Price,
        cart_items: &[CartItem],
    ) -> Self {
        Self {
            number,
            placed_on,
            total,
            status: OrderStatus::Processing,
            payment_method,
            items: cart_items
                .iter()
                .map(|item| OrderLineItem {
                    product_id: item.product_id,
                    name: item.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                    image_url: item.image_url.clone(),
                })
                .collect(),
        }
    }
}
