//! Checkout wizard route handlers.
//!
//! `GET /checkout` renders whichever step the session is at; the POST
//! handlers drive the transitions. The payment POST is the only slow
//! path: the store lock is released before awaiting the simulated
//! gateway, so an abandoned request (closed tab) drops mid-await and
//! never mutates the store.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};

use stride_core::PaymentMethod;

use crate::checkout::{CheckoutError, CheckoutStep, ShippingDetails};
use crate::error::AppError;
use crate::filters;
use crate::routes::cart::TotalsView;
use crate::state::AppState;
use crate::store::Store;

/// A cart line in the order summary sidebar.
#[derive(Clone)]
pub struct SummaryItemView {
    pub name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub line_total: String,
    pub image_url: String,
}

/// A payment method radio button.
#[derive(Clone)]
pub struct PaymentOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Step 1: the shipping form.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/shipping.html")]
pub struct CheckoutShippingTemplate {
    pub step: u8,
    pub shipping: ShippingDetails,
    pub items: Vec<SummaryItemView>,
    pub totals: TotalsView,
    pub cart_count: u32,
}

/// Step 2: payment method selection.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/payment.html")]
pub struct CheckoutPaymentTemplate {
    pub step: u8,
    pub payment_methods: Vec<PaymentOptionView>,
    pub items: Vec<SummaryItemView>,
    pub totals: TotalsView,
    pub cart_count: u32,
}

/// Step 3: order confirmation.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmed.html")]
pub struct CheckoutConfirmedTemplate {
    pub step: u8,
    pub order_number: String,
    pub placed_on: String,
    pub payment_method: String,
    pub total: String,
    pub cart_count: u32,
}

fn summary_items(store: &Store) -> Vec<SummaryItemView> {
    store
        .cart
        .items()
        .iter()
        .map(|item| SummaryItemView {
            name: item.name.clone(),
            size: item.size.clone(),
            color: item.color.clone(),
            quantity: item.quantity,
            line_total: item.line_total().to_string(),
            image_url: item.image_url.clone(),
        })
        .collect()
}

fn shipping_page(store: &Store) -> CheckoutShippingTemplate {
    CheckoutShippingTemplate {
        step: CheckoutStep::Shipping.number(),
        shipping: store.checkout.shipping().cloned().unwrap_or_default(),
        items: summary_items(store),
        totals: store.cart.totals().into(),
        cart_count: store.cart.item_count(),
    }
}

fn payment_page(store: &Store) -> CheckoutPaymentTemplate {
    CheckoutPaymentTemplate {
        step: CheckoutStep::Payment.number(),
        payment_methods: PaymentMethod::ALL
            .into_iter()
            .map(|method| PaymentOptionView {
                value: method.as_str(),
                label: method.label(),
                checked: method == PaymentMethod::default(),
            })
            .collect(),
        items: summary_items(store),
        totals: store.cart.totals().into(),
        cart_count: store.cart.item_count(),
    }
}

/// Render the wizard at its current step.
///
/// A confirmed session left over from a previous order is reset as soon
/// as the shopper returns with something in the cart, so the wizard
/// starts over instead of replaying the old confirmation.
pub async fn show(State(state): State<AppState>) -> Result<Response, AppError> {
    let stale = {
        let store = state.store().read().await;
        store.checkout.step() == CheckoutStep::Confirmed && !store.cart.is_empty()
    };
    if stale {
        state.store().write().await.checkout.reset();
    }

    let store = state.store().read().await;
    match store.checkout.step() {
        CheckoutStep::Shipping | CheckoutStep::Payment if store.cart.is_empty() => {
            Ok(Redirect::to("/cart").into_response())
        }
        CheckoutStep::Shipping => Ok(shipping_page(&store).into_response()),
        CheckoutStep::Payment => Ok(payment_page(&store).into_response()),
        CheckoutStep::Confirmed => {
            let receipt = store
                .checkout
                .receipt()
                .ok_or_else(|| AppError::NotFound("no confirmed order".to_owned()))?;
            let order = store
                .orders()
                .iter()
                .find(|o| o.number == receipt.order_number);
            Ok(CheckoutConfirmedTemplate {
                step: CheckoutStep::Confirmed.number(),
                order_number: receipt.order_number.to_string(),
                placed_on: order.map_or_else(String::new, |o| o.placed_on.to_string()),
                payment_method: receipt.payment_method.label().to_owned(),
                total: receipt.total.to_string(),
                cart_count: store.cart.item_count(),
            }
            .into_response())
        }
    }
}

/// Submit the shipping form: step 1 -> 2.
pub async fn submit_shipping(
    State(state): State<AppState>,
    Form(details): Form<ShippingDetails>,
) -> Result<Redirect, AppError> {
    let mut store = state.store().write().await;
    if store.cart.is_empty() {
        return Ok(Redirect::to("/cart"));
    }
    store.checkout.submit_shipping(details)?;
    Ok(Redirect::to("/checkout"))
}

/// Go back from payment to shipping: step 2 -> 1.
pub async fn back(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut store = state.store().write().await;
    store.checkout.back_to_shipping()?;
    Ok(Redirect::to("/checkout"))
}

/// Payment form.
#[derive(Debug, serde::Deserialize)]
pub struct PaymentForm {
    pub payment_method: String,
}

/// Submit the payment step: step 2 -> (gateway delay) -> 3.
///
/// The store lock is held only to read the total and later to record the
/// result. While the simulated gateway runs, nothing is locked and nothing
/// has been mutated, so a shopper who abandons the page mid-charge leaves
/// the cart and wizard exactly as they were.
pub async fn submit_payment(
    State(state): State<AppState>,
    Form(form): Form<PaymentForm>,
) -> Result<Redirect, AppError> {
    let method: PaymentMethod = form
        .payment_method
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown payment method: {}", form.payment_method)))?;

    let total = {
        let store = state.store().read().await;
        if store.cart.is_empty() {
            return Ok(Redirect::to("/cart"));
        }
        let step = store.checkout.step();
        if step != CheckoutStep::Payment {
            return Err(CheckoutError::WrongStep {
                expected: CheckoutStep::Payment,
                actual: step,
            }
            .into());
        }
        store.cart.totals().total
    };

    tracing::info!(method = method.as_str(), %total, "charging payment");
    let receipt = state.payments().charge(method, total).await;

    let mut store = state.store().write().await;
    // A racing double submit loses here: confirm validates the step again.
    store.checkout.confirm(receipt.clone())?;
    let order = store.place_order(&receipt);
    tracing::info!(order_number = %order.number, total = %order.total, "order placed");

    Ok(Redirect::to("/checkout"))
}
