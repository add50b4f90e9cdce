//! Cart page and cart mutation handlers.
//!
//! Every mutation is a form POST followed by a redirect back to the cart
//! page, so a browser refresh never replays the mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use stride_core::cart::{CartItem, CartTotals};
use stride_core::{LineId, ProductId};

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::store::StoreError;

/// One cart line, formatted for display.
#[derive(Clone)]
pub struct CartItemView {
    pub line_id: i32,
    pub product_id: i32,
    pub name: String,
    pub size: String,
    pub color: String,
    pub price: String,
    pub quantity: u32,
    /// Quantity the minus button posts. At quantity 1 this posts 0,
    /// which the store treats as a no-op (the floor invariant).
    pub minus_quantity: u32,
    /// Quantity the plus button posts.
    pub plus_quantity: u32,
    pub line_total: String,
    pub image_url: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            line_id: item.line_id.as_i32(),
            product_id: item.product_id.as_i32(),
            name: item.name.clone(),
            size: item.size.clone(),
            color: item.color.clone(),
            price: item.price.to_string(),
            quantity: item.quantity,
            minus_quantity: item.quantity.saturating_sub(1),
            plus_quantity: item.quantity + 1,
            line_total: item.line_total().to_string(),
            image_url: item.image_url.clone(),
        }
    }
}

/// The order summary box, shared with the checkout pages.
#[derive(Clone)]
pub struct TotalsView {
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl From<CartTotals> for TotalsView {
    fn from(totals: CartTotals) -> Self {
        Self {
            subtotal: totals.subtotal.to_string(),
            shipping: totals.shipping.to_string(),
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub items: Vec<CartItemView>,
    pub totals: TotalsView,
    pub cart_count: u32,
}

/// Display the cart page.
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().await;
    CartShowTemplate {
        items: store.cart.items().iter().map(CartItemView::from).collect(),
        totals: store.cart.totals().into(),
        cart_count: store.cart.item_count(),
    }
}

/// Add-to-cart form, posted from the product detail page.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<u32>,
}

/// Add a product to the cart.
///
/// Size and color are required picks; a missing one redirects back to the
/// detail page with an error code instead of failing the request, mirroring
/// the inline validation a shopper sees.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddForm>,
) -> Result<Redirect, AppError> {
    let detail_page = |code: &str| format!("/products/{}?error={code}", form.product_id);

    let Some(size) = form.size.filter(|s| !s.trim().is_empty()) else {
        return Ok(Redirect::to(&detail_page("size")));
    };
    let Some(color) = form.color.filter(|c| !c.trim().is_empty()) else {
        return Ok(Redirect::to(&detail_page("color")));
    };
    let quantity = form.quantity.unwrap_or(1);

    let mut store = state.store().write().await;
    match store.add_to_cart(ProductId::new(form.product_id), &size, &color, quantity) {
        Ok(line_id) => {
            tracing::info!(product_id = form.product_id, %line_id, quantity, "added to cart");
            Ok(Redirect::to("/cart"))
        }
        Err(StoreError::InsufficientStock { .. }) => Ok(Redirect::to(&detail_page("stock"))),
        Err(err) => Err(err.into()),
    }
}

/// Quantity update form, posted by the stepper buttons.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub line_id: i32,
    pub quantity: u32,
}

/// Set a line's quantity. Quantities below 1 are a no-op.
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateForm>) -> Redirect {
    let mut store = state.store().write().await;
    store.cart.set_quantity(LineId::new(form.line_id), form.quantity);
    Redirect::to("/cart")
}

/// Line removal form.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub line_id: i32,
}

/// Remove a line from the cart.
pub async fn remove(State(state): State<AppState>, Form(form): Form<RemoveForm>) -> Redirect {
    let mut store = state.store().write().await;
    store.cart.remove(LineId::new(form.line_id));
    Redirect::to("/cart")
}

/// Empty the cart.
pub async fn clear(State(state): State<AppState>) -> Redirect {
    let mut store = state.store().write().await;
    store.cart.clear();
    Redirect::to("/cart")
}

/// Coupon form. Codes are accepted but never applied; no discount system
/// exists behind the input.
#[derive(Debug, Deserialize)]
pub struct CouponForm {
    pub code: String,
}

/// Accept a coupon code without applying it.
pub async fn coupon(Form(form): Form<CouponForm>) -> Redirect {
    tracing::info!(code = %form.code, "coupon code entered, no discount applied");
    Redirect::to("/cart")
}
