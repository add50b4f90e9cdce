//! End-to-end page tests, driving the router with in-process requests.
//!
//! No socket is bound: `tower::ServiceExt::oneshot` feeds requests straight
//! into the router. The payment delay is set to zero so the wizard tests
//! run instantly.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use stride_storefront::config::StorefrontConfig;
use stride_storefront::state::AppState;

fn test_app() -> Router {
    let config = StorefrontConfig {
        payment_delay_ms: 0,
        ..StorefrontConfig::default()
    };
    stride_storefront::app(AppState::new(config))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// POST a form body and return the response status plus Location header.
async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    (status, location)
}

const SHIPPING_FORM: &str = "first_name=Ada&last_name=Lovelace&email=ada%40example.com\
&phone=555-0100&address=123+Main+Street&city=New+York&state=NY&zip=10001&country=USA";

#[tokio::test]
async fn health_check() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn home_page_shows_featured_products_and_categories() {
    let app = test_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Featured Products"));
    assert!(body.contains("Shop by Category"));
    assert!(body.contains("Premium Leather Running Shoes"));
    assert!(body.contains("/products?category=SPORTS"));
}

#[tokio::test]
async fn listing_applies_default_price_ceiling() {
    let app = test_app();
    let (status, body) = get(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);
    // $129.99 passes the default $200 ceiling.
    assert!(body.contains("Premium Leather Running Shoes"));
}

#[tokio::test]
async fn listing_filters_by_category_and_search() {
    let app = test_app();
    let (_, body) = get(&app, "/products?category=BOOTS").await;
    assert!(body.contains("Trail Hiking Boots"));
    assert!(!body.contains("Summer Sandals"));

    let (_, body) = get(&app, "/products?q=oxford").await;
    assert!(body.contains("Formal Oxford Shoes"));
    assert!(!body.contains("Beach Flip Flops"));
}

#[tokio::test]
async fn listing_with_impossible_range_shows_empty_state() {
    let app = test_app();
    let (status, body) = get(&app, "/products?min_price=290&max_price=300").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("0 products found"));
    assert!(body.contains("No products match your filters."));
}

#[tokio::test]
async fn detail_page_renders_options() {
    let app = test_app();
    let (status, body) = get(&app, "/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Premium Leather Running Shoes"));
    assert!(body.contains("Add to Cart"));
    assert!(body.contains("$129.99"));
}

#[tokio::test]
async fn detail_page_unknown_product_is_404() {
    let app = test_app();
    let (status, _) = get(&app, "/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_without_size_redirects_back_with_error() {
    let app = test_app();
    let (status, location) = post_form(&app, "/cart/add", "product_id=1&color=Black").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/products/1?error=size"));

    let (_, body) = get(&app, "/products/1?error=size").await;
    assert!(body.contains("Please select a size"));
}

#[tokio::test]
async fn add_to_cart_then_cart_page_shows_line() {
    let app = test_app();
    let (status, location) =
        post_form(&app, "/cart/add", "product_id=3&size=10&color=Black&quantity=1").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/cart"));

    let (_, body) = get(&app, "/cart").await;
    assert!(body.contains("Formal Oxford Shoes"));
}

#[tokio::test]
async fn seeded_cart_totals_match_worked_example() {
    let app = test_app();
    let (status, body) = get(&app, "/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("$289.97"));
    assert!(body.contains("$10.00"));
    assert!(body.contains("$23.20"));
    assert!(body.contains("$323.17"));
}

#[tokio::test]
async fn quantity_update_below_one_is_ignored() {
    let app = test_app();
    // The seed cart's first line has quantity 1; posting 0 must not change it.
    let (status, _) = post_form(&app, "/cart/update", "line_id=1&quantity=0").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, "/cart").await;
    assert!(body.contains("$323.17"));
}

#[tokio::test]
async fn clearing_the_cart_shows_empty_state() {
    let app = test_app();
    post_form(&app, "/cart/clear", "").await;
    let (_, body) = get(&app, "/cart").await;
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
async fn coupon_is_accepted_but_total_is_unchanged() {
    let app = test_app();
    let (status, location) = post_form(&app, "/cart/coupon", "code=SAVE20").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/cart"));

    let (_, body) = get(&app, "/cart").await;
    assert!(body.contains("$323.17"));
}

#[tokio::test]
async fn checkout_with_empty_cart_redirects_to_cart() {
    let app = test_app();
    post_form(&app, "/cart/clear", "").await;
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/checkout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn shipping_with_missing_field_is_rejected() {
    let app = test_app();
    let incomplete = "first_name=Ada&last_name=&email=a%40b.c&phone=1&address=x&city=y\
&state=z&zip=1&country=w";
    let (status, _) = post_form(&app, "/checkout/shipping", incomplete).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Still at step 1.
    let (_, body) = get(&app, "/checkout").await;
    assert!(body.contains("Shipping Information"));
}

#[tokio::test]
async fn full_wizard_flow_places_the_order() {
    let app = test_app();

    // Step 1: shipping.
    let (status, location) = post_form(&app, "/checkout/shipping", SHIPPING_FORM).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/checkout"));

    // Step 2 renders the payment methods.
    let (_, body) = get(&app, "/checkout").await;
    assert!(body.contains("Payment Method"));
    assert!(body.contains("credit-card"));
    assert!(body.contains("PayPal"));

    // Step 2 -> 3.
    let (status, _) = post_form(&app, "/checkout/payment", "payment_method=credit-card").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    // Confirmation shows an ORD-#### number and the cart's total.
    let (_, body) = get(&app, "/checkout").await;
    assert!(body.contains("Thank you for your order!"));
    assert!(body.contains("ORD-"));
    assert!(body.contains("$323.17"));

    // The cart was consumed and the order is first in the history.
    let (_, body) = get(&app, "/cart").await;
    assert!(body.contains("Your cart is empty."));
    let (_, body) = get(&app, "/orders").await;
    assert!(body.contains("$323.17"));
}

#[tokio::test]
async fn back_from_payment_keeps_entered_details() {
    let app = test_app();
    post_form(&app, "/checkout/shipping", SHIPPING_FORM).await;

    let (status, _) = post_form(&app, "/checkout/back", "").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, "/checkout").await;
    assert!(body.contains("value=\"Ada\""));
    assert!(body.contains("value=\"Lovelace\""));
}

#[tokio::test]
async fn payment_post_from_step_one_is_conflict() {
    let app = test_app();
    let (status, _) = post_form(&app, "/checkout/payment", "payment_method=paypal").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn orders_page_tabs_filter_by_status() {
    let app = test_app();
    let (status, body) = get(&app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ORD-1234"));
    assert!(body.contains("ORD-5678"));
    assert!(body.contains("ORD-9012"));

    let (_, body) = get(&app, "/orders?status=processing").await;
    assert!(body.contains("ORD-5678"));
    assert!(!body.contains("ORD-1234"));

    let (_, body) = get(&app, "/orders?status=shipped").await;
    assert!(body.contains("No shipped orders"));
}

#[tokio::test]
async fn orders_page_expand_shows_line_items() {
    let app = test_app();
    let (_, body) = get(&app, "/orders?expand=ORD-1234").await;
    assert!(body.contains("Order has been delivered"));
    assert!(body.contains("Hide Details"));
}

#[tokio::test]
async fn orders_page_unknown_status_is_bad_request() {
    let app = test_app();
    let (status, _) = get(&app, "/orders?status=lost").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn responses_carry_security_and_request_id_headers() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.contains_key("x-request-id"));
    assert!(headers.contains_key("content-security-policy"));
}
