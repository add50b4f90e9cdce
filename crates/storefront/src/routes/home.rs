//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use stride_core::catalog::{CategoryTile, Product};

use crate::filters;
use crate::state::AppState;

/// Product card data for the featured grid.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category: product.category.to_string(),
            price: product.price.to_string(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Category tile data for the shop-by-category band.
#[derive(Clone)]
pub struct CategoryTileView {
    pub name: String,
    pub href: String,
    pub image_url: String,
}

impl From<&CategoryTile> for CategoryTileView {
    fn from(tile: &CategoryTile) -> Self {
        Self {
            name: tile.category.to_string(),
            href: format!("/products?category={}", tile.category.as_str()),
            image_url: tile.image_url.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured products for the grid below the hero.
    pub featured_products: Vec<ProductCardView>,
    /// Category tiles for the shop-by-category band.
    pub categories: Vec<CategoryTileView>,
    pub cart_count: u32,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().await;

    HomeTemplate {
        featured_products: store
            .featured_products()
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
        categories: store
            .category_tiles()
            .iter()
            .map(CategoryTileView::from)
            .collect(),
        cart_count: store.cart.item_count(),
    }
}
