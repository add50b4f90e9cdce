//! Product listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use stride_core::catalog::{
    COLORS, CatalogFilter, Category, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, PRICE_SLIDER_MAX,
    Product, SIZES, SortKey,
};
use stride_core::{Price, ProductId};

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Product card data for the listing grid.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub rating: Option<String>,
    pub in_stock: bool,
    pub image_url: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.to_string(),
            price: product.price.to_string(),
            rating: product.rating.map(|r| r.to_string()),
            in_stock: product.in_stock(),
            image_url: product.image_url.clone(),
        }
    }
}

/// A checkbox in the filter sidebar.
#[derive(Clone)]
pub struct FilterOptionView {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

/// An entry in the sort dropdown.
#[derive(Clone)]
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The listing controls, decoded from the query string.
///
/// Checkbox groups repeat their key (`?category=BOOTS&category=SANDALS`),
/// which `serde_urlencoded` cannot collect into a `Vec`, so the raw pair
/// list is folded by hand. Unknown values are ignored rather than
/// rejected; a shared listing URL with a stale category should still
/// render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub filter: CatalogFilter,
    pub sort: SortKey,
    /// Whole-dollar bounds, echoed back into the range inputs.
    pub min_dollars: i64,
    pub max_dollars: i64,
}

impl ListingQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut filter = CatalogFilter::default();
        let mut sort = SortKey::default();
        let mut min_dollars = dollars(DEFAULT_PRICE_MIN);
        let mut max_dollars = dollars(DEFAULT_PRICE_MAX);

        for (key, value) in pairs {
            match key.as_str() {
                "category" => match value.parse::<Category>() {
                    Ok(category) => {
                        filter.categories.insert(category);
                    }
                    Err(_) => tracing::debug!(%value, "ignoring unknown category"),
                },
                "size" if SIZES.contains(&value.as_str()) => {
                    filter.sizes.insert(value.clone());
                }
                "color" if COLORS.contains(&value.as_str()) => {
                    filter.colors.insert(value.clone());
                }
                "min_price" => {
                    if let Ok(d) = value.parse::<i64>() {
                        min_dollars = d.clamp(0, dollars(PRICE_SLIDER_MAX));
                    }
                }
                "max_price" => {
                    if let Ok(d) = value.parse::<i64>() {
                        max_dollars = d.clamp(0, dollars(PRICE_SLIDER_MAX));
                    }
                }
                "sort" => sort = value.parse().unwrap_or_default(),
                "q" if !value.trim().is_empty() => {
                    filter.query = Some(value.clone());
                }
                _ => {}
            }
        }

        filter.price_min = Price::from_cents(min_dollars * 100);
        filter.price_max = Price::from_cents(max_dollars * 100);
        Self {
            filter,
            sort,
            min_dollars,
            max_dollars,
        }
    }
}

/// Whole-dollar value of a price, for the range inputs.
fn dollars(price: Price) -> i64 {
    use rust_decimal::prelude::ToPrimitive;
    price.amount().trunc().to_i64().unwrap_or(0)
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub result_count: usize,
    pub categories: Vec<FilterOptionView>,
    pub sizes: Vec<FilterOptionView>,
    pub colors: Vec<FilterOptionView>,
    pub sort_options: Vec<SortOptionView>,
    pub min_dollars: i64,
    pub max_dollars: i64,
    pub slider_max_dollars: i64,
    pub search_query: String,
    pub cart_count: u32,
}

/// Display the product listing with the filter/sort pipeline applied.
pub async fn index(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let query = ListingQuery::from_pairs(&pairs);
    let store = state.store().read().await;
    let products: Vec<ProductCardView> = query
        .filter
        .apply(store.products(), query.sort)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    ProductsIndexTemplate {
        result_count: products.len(),
        products,
        categories: Category::ALL
            .into_iter()
            .map(|category| FilterOptionView {
                value: category.as_str().to_owned(),
                label: category.to_string(),
                checked: query.filter.categories.contains(&category),
            })
            .collect(),
        sizes: SIZES
            .into_iter()
            .map(|size| FilterOptionView {
                value: size.to_owned(),
                label: size.to_owned(),
                checked: query.filter.sizes.contains(size),
            })
            .collect(),
        colors: COLORS
            .into_iter()
            .map(|color| FilterOptionView {
                value: color.to_owned(),
                label: color.to_owned(),
                checked: query.filter.colors.contains(color),
            })
            .collect(),
        sort_options: SortKey::ALL
            .into_iter()
            .map(|key| SortOptionView {
                value: key.as_str(),
                label: key.label(),
                selected: key == query.sort,
            })
            .collect(),
        min_dollars: query.min_dollars,
        max_dollars: query.max_dollars,
        slider_max_dollars: dollars(PRICE_SLIDER_MAX),
        search_query: query.filter.query.unwrap_or_default(),
        cart_count: store.cart.item_count(),
    }
}

/// Detail page query parameters: an optional error code set by a failed
/// add-to-cart redirect.
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub error: Option<String>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub rating: Option<String>,
    pub in_stock: bool,
    pub stock_quantity: u32,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub image_url: String,
    pub error: Option<String>,
    pub cart_count: u32,
}

/// Message for an `?error=` code on the detail page.
fn error_message(code: &str) -> String {
    match code {
        "size" => "Please select a size".to_owned(),
        "color" => "Please select a color".to_owned(),
        "stock" => "Not enough stock for the requested quantity".to_owned(),
        other => {
            tracing::debug!(code = other, "unknown detail page error code");
            "Something went wrong, please try again".to_owned()
        }
    }
}

/// Display a product detail page.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<DetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store().read().await;
    let product = store.product(ProductId::new(id))?;

    Ok(ProductShowTemplate {
        id: product.id.as_i32(),
        name: product.name.clone(),
        brand: product.brand.clone(),
        description: product.description.clone(),
        category: product.category.to_string(),
        price: product.price.to_string(),
        rating: product.rating.map(|r| r.to_string()),
        in_stock: product.in_stock(),
        stock_quantity: product.stock_quantity,
        sizes: product.sizes.clone(),
        colors: product.colors.clone(),
        image_url: product.image_url.clone(),
        error: query.error.as_deref().map(error_message),
        cart_count: store.cart.item_count(),
    })
}
