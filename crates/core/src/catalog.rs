//! Products, categories and the catalog filter/sort pipeline.
//!
//! The pipeline is the one genuinely reusable piece of logic in the shop:
//! given the full product list and the current filter controls, it derives
//! the ordered sequence to render. It is re-run synchronously on every
//! request with no caching.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Price, ProductId, UnknownVariant};

/// Shoe sizes offered across the catalog, in display order.
pub const SIZES: [&str; 6] = ["6", "7", "8", "9", "10", "11"];

/// Colorways offered across the catalog, in display order.
pub const COLORS: [&str; 5] = ["Black", "White", "Brown", "Blue", "Red"];

/// Product category. A closed set: products cannot carry an unknown
/// category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Casual,
    Sports,
    Formal,
    Boots,
    Sandals,
    Sneakers,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Casual,
        Self::Sports,
        Self::Formal,
        Self::Boots,
        Self::Sandals,
        Self::Sneakers,
    ];

    /// Catalog form, e.g. `SPORTS`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "CASUAL",
            Self::Sports => "SPORTS",
            Self::Formal => "FORMAL",
            Self::Boots => "BOOTS",
            Self::Sandals => "SANDALS",
            Self::Sneakers => "SNEAKERS",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: Price,
    pub category: Category,
    pub stock_quantity: u32,
    pub featured: bool,
    pub image_url: String,
    /// Average review rating out of 5, if the product has reviews.
    pub rating: Option<rust_decimal::Decimal>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl Product {
    /// Whether any stock remains.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// A category tile on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTile {
    pub id: CategoryId,
    pub category: Category,
    pub image_url: String,
}

/// Sort order for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// No reordering: preserves filter-pass order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
}

impl SortKey {
    pub const ALL: [Self; 4] = [
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
    ];

    /// Query-string form, matching the sort dropdown values.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
        }
    }

    /// Dropdown label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Rating",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// Default lower bound of the price range control.
pub const DEFAULT_PRICE_MIN: Price = Price::from_cents(0);
/// Default upper bound of the price range control.
pub const DEFAULT_PRICE_MAX: Price = Price::from_cents(20_000);
/// Maximum value of the price range slider.
pub const PRICE_SLIDER_MAX: Price = Price::from_cents(30_000);

/// The filter controls on the product listing page.
///
/// Empty category/size/color sets mean "no restriction on that axis".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Inclusive price range `[min, max]`.
    pub price_min: Price,
    pub price_max: Price,
    pub categories: BTreeSet<Category>,
    pub sizes: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    /// Case-insensitive substring match on the product name.
    pub query: Option<String>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            categories: BTreeSet::new(),
            sizes: BTreeSet::new(),
            colors: BTreeSet::new(),
            query: None,
        }
    }
}

impl CatalogFilter {
    /// Filter predicate: a product passes iff its price lies in the
    /// inclusive range and, for every non-empty selection set, the product
    /// matches (or intersects) that set.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if product.price < self.price_min || product.price > self.price_max {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.sizes.is_empty() && !product.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }
        if !self.colors.is_empty() && !product.colors.iter().any(|c| self.colors.contains(c)) {
            return false;
        }
        if let Some(query) = &self.query {
            let query = query.trim();
            if !query.is_empty()
                && !product.name.to_lowercase().contains(&query.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    /// Run the full pipeline: filter, then stable-sort by `sort`.
    ///
    /// `SortKey::Featured` performs no reordering, so the output preserves
    /// the filter-pass order of the input slice.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product], sort: SortKey) -> Vec<&'a Product> {
        let mut result: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        match sort {
            SortKey::Featured => {}
            SortKey::PriceLowToHigh => result.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHighToLow => result.sort_by(|a, b| b.price.cmp(&a.price)),
            // Unrated products sort last.
            SortKey::Rating => result.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn catalog() -> Vec<Product> {
        seed::catalog()
    }

    #[test]
    fn test_default_filter_keeps_products_up_to_200() {
        let products = catalog();
        let filter = CatalogFilter::default();
        let result = filter.apply(&products, SortKey::Featured);
        assert!(!result.is_empty());
        for product in result {
            assert!(product.price <= DEFAULT_PRICE_MAX);
        }
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let products = catalog();
        let filter = CatalogFilter {
            price_min: Price::from_cents(12_999),
            price_max: Price::from_cents(12_999),
            ..CatalogFilter::default()
        };
        let result = filter.apply(&products, SortKey::Featured);
        assert!(!result.is_empty());
        for product in result {
            assert_eq!(product.price, Price::from_cents(12_999));
        }
    }

    #[test]
    fn test_every_result_is_within_price_range() {
        let products = catalog();
        let filter = CatalogFilter {
            price_min: Price::from_cents(6_000),
            price_max: Price::from_cents(13_000),
            ..CatalogFilter::default()
        };
        for product in filter.apply(&products, SortKey::Featured) {
            assert!(product.price >= filter.price_min);
            assert!(product.price <= filter.price_max);
        }
    }

    #[test]
    fn test_category_membership() {
        let products = catalog();
        let mut filter = CatalogFilter::default();
        filter.categories.insert(Category::Boots);
        filter.categories.insert(Category::Sandals);
        let result = filter.apply(&products, SortKey::Featured);
        assert!(!result.is_empty());
        for product in result {
            assert!(filter.categories.contains(&product.category));
        }
    }

    #[test]
    fn test_empty_category_set_excludes_nothing_on_category_grounds() {
        let products = catalog();
        let filter = CatalogFilter {
            price_max: PRICE_SLIDER_MAX,
            ..CatalogFilter::default()
        };
        assert_eq!(filter.apply(&products, SortKey::Featured).len(), products.len());
    }

    #[test]
    fn test_size_intersection() {
        let products = catalog();
        let mut filter = CatalogFilter::default();
        filter.sizes.insert("11".to_owned());
        for product in filter.apply(&products, SortKey::Featured) {
            assert!(product.sizes.iter().any(|s| s == "11"));
        }
    }

    #[test]
    fn test_color_intersection() {
        let products = catalog();
        let mut filter = CatalogFilter::default();
        filter.colors.insert("Red".to_owned());
        for product in filter.apply(&products, SortKey::Featured) {
            assert!(product.colors.iter().any(|c| c == "Red"));
        }
    }

    #[test]
    fn test_name_query_is_case_insensitive() {
        let products = catalog();
        let filter = CatalogFilter {
            query: Some("oxford".to_owned()),
            ..CatalogFilter::default()
        };
        let result = filter.apply(&products, SortKey::Featured);
        assert!(!result.is_empty());
        for product in result {
            assert!(product.name.to_lowercase().contains("oxford"));
        }
    }

    #[test]
    fn test_blank_query_excludes_nothing() {
        let products = catalog();
        let blank = CatalogFilter {
            query: Some("   ".to_owned()),
            ..CatalogFilter::default()
        };
        let none = CatalogFilter::default();
        assert_eq!(
            blank.apply(&products, SortKey::Featured).len(),
            none.apply(&products, SortKey::Featured).len()
        );
    }

    #[test]
    fn test_price_low_to_high_is_non_decreasing() {
        let products = catalog();
        let result = CatalogFilter::default().apply(&products, SortKey::PriceLowToHigh);
        for pair in result.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_price_high_to_low_is_non_increasing() {
        let products = catalog();
        let result = CatalogFilter::default().apply(&products, SortKey::PriceHighToLow);
        for pair in result.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
    }

    #[test]
    fn test_rating_is_non_increasing_with_unrated_last() {
        let products = catalog();
        let result = CatalogFilter::default().apply(&products, SortKey::Rating);
        for pair in result.windows(2) {
            match (pair[0].rating, pair[1].rating) {
                (Some(a), Some(b)) => assert!(a >= b),
                (None, Some(_)) => panic!("unrated product sorted before rated"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_featured_sort_preserves_filter_pass_order() {
        let products = catalog();
        let result = CatalogFilter::default().apply(&products, SortKey::Featured);
        let ids: Vec<_> = result.iter().map(|p| p.id).collect();
        let expected: Vec<_> = products
            .iter()
            .filter(|p| CatalogFilter::default().matches(p))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_contradictory_filter_yields_empty_result() {
        let products = catalog();
        let filter = CatalogFilter {
            price_min: Price::from_cents(29_000),
            price_max: Price::from_cents(29_999),
            ..CatalogFilter::default()
        };
        assert!(filter.apply(&products, SortKey::Featured).is_empty());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLowToHigh);
        assert!("newest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_category_parse_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("SLIPPERS".parse::<Category>().is_err());
    }
}
