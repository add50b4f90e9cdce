//! Product table route handlers.
//!
//! Deletion is a form POST per row, redirecting back to the unfiltered
//! table.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use stride_core::ProductId;
use stride_core::catalog::Product;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// One row of the product table.
#[derive(Clone)]
pub struct ProductRowView {
    pub id: i32,
    pub image_url: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock_quantity: u32,
    pub in_stock: bool,
    pub featured: bool,
    pub delete_action: String,
}

impl From<&Product> for ProductRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            image_url: product.image_url.clone(),
            name: product.name.clone(),
            category: product.category.to_string(),
            price: product.price.to_string(),
            stock_quantity: product.stock_quantity,
            in_stock: product.in_stock(),
            featured: product.featured,
            delete_action: format!("/products/{}/delete", product.id),
        }
    }
}

/// Table query parameters.
#[derive(Debug, Deserialize)]
pub struct TableQuery {
    pub q: Option<String>,
}

/// Product table template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub rows: Vec<ProductRowView>,
    pub row_count: usize,
    pub search_query: String,
}

/// Display the product table, filtered by the search box.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> impl IntoResponse {
    let search_query = query.q.unwrap_or_default();
    let catalog = state.catalog().read().await;
    let rows: Vec<ProductRowView> = catalog
        .search(&search_query)
        .into_iter()
        .map(ProductRowView::from)
        .collect();

    ProductsIndexTemplate {
        row_count: rows.len(),
        rows,
        search_query,
    }
}

/// Delete a product row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    let mut catalog = state.catalog().write().await;
    catalog.delete(ProductId::new(id))?;
    tracing::info!(product_id = id, "product deleted");
    Ok(Redirect::to("/products"))
}
