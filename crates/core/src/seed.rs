//! Hard-coded mock fixtures standing in for a real data source.
//!
//! Both binaries seed their stores from here, so the storefront pages and
//! the admin table agree on the catalog. Everything is deterministic; a
//! process restart resets the shop to exactly this state.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::cart::{Cart, CartItem};
use crate::catalog::{Category, CategoryTile, Product};
use crate::order::{Order, OrderLineItem};
use crate::types::{CategoryId, LineId, OrderNumber, OrderStatus, PaymentMethod, Price, ProductId};

/// Placeholder image served by the binaries' static routes.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Rating out of 5 with one decimal place, e.g. `rating(45)` => 4.5.
const fn rating(tenths: i64) -> Option<Decimal> {
    let abs = tenths.unsigned_abs();
    Some(Decimal::from_parts(
        abs as u32,
        (abs >> 32) as u32,
        0,
        tenths < 0,
        1,
    ))
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i32,
    name: &str,
    cents: i64,
    category: Category,
    stock_quantity: u32,
    featured: bool,
    rating: Option<Decimal>,
    sizes: &[&str],
    colors: &[&str],
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        brand: "Stride".to_owned(),
        price: Price::from_cents(cents),
        category,
        stock_quantity,
        featured,
        image_url: PLACEHOLDER_IMAGE.to_owned(),
        rating,
        sizes: strings(sizes),
        colors: strings(colors),
    }
}

/// The full mock catalog.
#[must_use]
pub fn catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Leather Running Shoes",
            12_999,
            Category::Sports,
            45,
            true,
            rating(45),
            &["6", "7", "8", "9", "10", "11"],
            &["Black", "White", "Blue"],
            "Experience ultimate comfort with our premium leather running \
             shoes. Designed for both performance and style, these shoes \
             feature advanced cushioning technology and durable construction \
             for long-lasting wear.",
        ),
        product(
            2,
            "Casual Canvas Sneakers",
            7_999,
            Category::Casual,
            78,
            false,
            rating(40),
            &["6", "7", "8", "9"],
            &["White", "Blue", "Red"],
            "Lightweight canvas sneakers for everyday wear.",
        ),
        product(
            3,
            "Formal Oxford Shoes",
            14_999,
            Category::Formal,
            32,
            true,
            rating(50),
            &["7", "8", "9", "10", "11"],
            &["Black", "Brown"],
            "Classic cap-toe oxfords in polished full-grain leather.",
        ),
        product(
            4,
            "Summer Sandals",
            5_999,
            Category::Sandals,
            54,
            false,
            rating(40),
            &["6", "7", "8", "9", "10"],
            &["Brown", "Black"],
            "Breathable strapped sandals with a contoured footbed.",
        ),
        product(
            5,
            "Classic Running Shoes",
            8_999,
            Category::Sports,
            61,
            true,
            rating(43),
            &["6", "7", "8", "9", "10", "11"],
            &["White", "Blue"],
            "A dependable everyday runner with a responsive midsole.",
        ),
        product(
            6,
            "Casual Leather Boots",
            12_999,
            Category::Boots,
            27,
            true,
            rating(46),
            &["8", "9", "10", "11"],
            &["Brown", "Black"],
            "Rugged lace-up boots that break in, not down.",
        ),
        product(
            7,
            "Trail Hiking Boots",
            13_999,
            Category::Boots,
            19,
            false,
            rating(48),
            &["7", "8", "9", "10", "11"],
            &["Brown"],
            "Waterproof hikers with an aggressive lugged outsole.",
        ),
        product(
            8,
            "Slip-On Loafers",
            9_499,
            Category::Casual,
            40,
            false,
            rating(38),
            &["7", "8", "9", "10"],
            &["Brown", "Black", "Blue"],
            "Soft suede loafers with a cushioned heel cup.",
        ),
        product(
            9,
            "High-Top Sneakers",
            10_999,
            Category::Sneakers,
            66,
            false,
            rating(42),
            &["6", "7", "8", "9", "10", "11"],
            &["Black", "White", "Red"],
            "Court-inspired high-tops with padded ankle support.",
        ),
        product(
            10,
            "Suede Derby Shoes",
            11_999,
            Category::Formal,
            23,
            false,
            None,
            &["7", "8", "9", "10"],
            &["Brown", "Blue"],
            "Open-laced derbies in brushed suede, dressed up or down.",
        ),
        product(
            11,
            "Beach Flip Flops",
            2_499,
            Category::Sandals,
            120,
            false,
            rating(35),
            &["6", "7", "8", "9", "10", "11"],
            &["Black", "Blue", "Red"],
            "Quick-drying flip flops with arch support.",
        ),
        product(
            12,
            "Court Tennis Sneakers",
            9_999,
            Category::Sneakers,
            48,
            true,
            rating(44),
            &["6", "7", "8", "9", "10"],
            &["White", "Red"],
            "Grippy all-court sneakers built for lateral movement.",
        ),
    ]
}

/// Category tiles for the home page grid.
#[must_use]
pub fn category_tiles() -> Vec<CategoryTile> {
    Category::ALL
        .into_iter()
        .enumerate()
        .map(|(index, category)| CategoryTile {
            id: CategoryId::new(i32::try_from(index).unwrap_or(0) + 1),
            category,
            image_url: PLACEHOLDER_IMAGE.to_owned(),
        })
        .collect()
}

/// The pre-seeded cart: one pair of running shoes, two pairs of canvas
/// sneakers.
#[must_use]
pub fn cart() -> Cart {
    let mut cart = Cart::new();
    cart.push_seed_line(CartItem {
        line_id: LineId::new(0),
        product_id: ProductId::new(1),
        name: "Premium Leather Running Shoes".to_owned(),
        price: Price::from_cents(12_999),
        size: "9".to_owned(),
        color: "Black".to_owned(),
        quantity: 1,
        image_url: PLACEHOLDER_IMAGE.to_owned(),
    });
    cart.push_seed_line(CartItem {
        line_id: LineId::new(0),
        product_id: ProductId::new(2),
        name: "Casual Canvas Sneakers".to_owned(),
        price: Price::from_cents(7_999),
        size: "8".to_owned(),
        color: "White".to_owned(),
        quantity: 2,
        image_url: PLACEHOLDER_IMAGE.to_owned(),
    });
    cart
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn order_line(product_id: i32, name: &str, cents: i64, quantity: u32) -> OrderLineItem {
    OrderLineItem {
        product_id: ProductId::new(product_id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        quantity,
        image_url: PLACEHOLDER_IMAGE.to_owned(),
    }
}

/// Past orders for the order history page.
#[must_use]
pub fn order_history() -> Vec<Order> {
    vec![
        Order {
            number: OrderNumber::new(1234),
            placed_on: date(2023, 5, 15),
            total: Price::from_cents(28_997),
            status: OrderStatus::Delivered,
            payment_method: PaymentMethod::CreditCard,
            items: vec![
                order_line(1, "Premium Leather Running Shoes", 12_999, 1),
                order_line(2, "Casual Canvas Sneakers", 7_999, 2),
            ],
        },
        Order {
            number: OrderNumber::new(5678),
            placed_on: date(2023, 4, 28),
            total: Price::from_cents(14_999),
            status: OrderStatus::Processing,
            payment_method: PaymentMethod::CreditCard,
            items: vec![order_line(3, "Formal Oxford Shoes", 14_999, 1)],
        },
        Order {
            number: OrderNumber::new(9012),
            placed_on: date(2023, 3, 10),
            total: Price::from_cents(5_999),
            status: OrderStatus::Delivered,
            payment_method: PaymentMethod::Paypal,
            items: vec![order_line(4, "Summer Sandals", 5_999, 1)],
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let products = catalog();
        let mut ids: Vec<_> = products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_catalog_sizes_and_colors_come_from_known_sets() {
        use crate::catalog::{COLORS, SIZES};
        for product in catalog() {
            assert!(!product.sizes.is_empty());
            assert!(!product.colors.is_empty());
            for size in &product.sizes {
                assert!(SIZES.contains(&size.as_str()));
            }
            for color in &product.colors {
                assert!(COLORS.contains(&color.as_str()));
            }
        }
    }

    #[test]
    fn test_catalog_has_featured_products() {
        assert!(catalog().iter().any(|p| p.featured));
    }

    #[test]
    fn test_one_tile_per_category() {
        let tiles = category_tiles();
        assert_eq!(tiles.len(), Category::ALL.len());
    }

    #[test]
    fn test_seed_cart_matches_worked_example() {
        let cart = cart();
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.totals().subtotal, Price::from_cents(28_997));
    }

    #[test]
    fn test_order_history_statuses() {
        let orders = order_history();
        assert_eq!(orders.len(), 3);
        assert!(orders.iter().any(|o| o.status == OrderStatus::Processing));
        assert!(orders.iter().any(|o| o.status == OrderStatus::Delivered));
    }
}
