//! Admin product table tests, driving the router with in-process requests.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use stride_admin::config::AdminConfig;
use stride_admin::state::AppState;

fn test_app() -> Router {
    stride_admin::app(AppState::new(AdminConfig::default()))
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

async fn post(app: &Router, uri: &str) -> StatusCode {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn health_check() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn root_redirects_to_the_product_table() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/products");
}

#[tokio::test]
async fn table_lists_the_seed_catalog() {
    let app = test_app();
    let (status, body) = get(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("12 products"));
    assert!(body.contains("Premium Leather Running Shoes"));
    assert!(body.contains("$129.99"));
}

#[tokio::test]
async fn search_filters_by_name() {
    let app = test_app();
    let (_, body) = get(&app, "/products?q=boots").await;
    assert!(body.contains("Trail Hiking Boots"));
    assert!(body.contains("Casual Leather Boots"));
    assert!(!body.contains("Summer Sandals"));

    let (_, body) = get(&app, "/products?q=zeppelin").await;
    assert!(body.contains("0 products"));
    assert!(body.contains("No products match your search."));
}

#[tokio::test]
async fn delete_removes_the_row() {
    let app = test_app();
    let status = post(&app, "/products/11/delete").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, body) = get(&app, "/products").await;
    assert!(!body.contains("Beach Flip Flops"));
    assert!(body.contains("11 products"));
}

#[tokio::test]
async fn deleting_an_unknown_product_is_404() {
    let app = test_app();
    assert_eq!(post(&app, "/products/999/delete").await, StatusCode::NOT_FOUND);
}
