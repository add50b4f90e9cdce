//! Order history route handler.
//!
//! The page is fully server-rendered: the status tabs and the
//! expand/collapse toggle are plain links that re-request the page with
//! different query parameters.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use stride_core::order::Order;
use stride_core::types::OrderStatus;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Query parameters: the active status tab and the expanded order, if any.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub status: Option<String>,
    pub expand: Option<String>,
}

/// A line item inside an expanded order panel.
#[derive(Clone)]
pub struct OrderItemView {
    pub product_id: i32,
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
    pub image_url: String,
}

/// One order row, with its expandable detail panel.
#[derive(Clone)]
pub struct OrderView {
    pub number: String,
    pub placed_on: String,
    pub total: String,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub status_icon: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    pub payment_method: &'static str,
    pub expanded: bool,
    pub toggle_href: String,
    pub toggle_label: &'static str,
    pub items: Vec<OrderItemView>,
}

/// A status filter tab above the order list.
#[derive(Clone)]
pub struct TabView {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub tabs: Vec<TabView>,
    pub orders: Vec<OrderView>,
    pub empty_message: String,
    pub cart_count: u32,
}

/// CSS badge class for a status.
const fn badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Processing => "badge badge-blue",
        OrderStatus::Shipped => "badge badge-amber",
        OrderStatus::Delivered => "badge badge-green",
        OrderStatus::Cancelled => "badge badge-red",
        OrderStatus::Returned => "badge badge-gray",
    }
}

/// Glyph shown in the expanded status panel.
const fn status_icon(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Processing => "\u{23f3}",        // hourglass
        OrderStatus::Shipped => "\u{1f69a}",          // truck
        OrderStatus::Delivered => "\u{2713}",         // check mark
        OrderStatus::Cancelled => "\u{2715}",         // cross
        OrderStatus::Returned => "\u{21a9}",          // return arrow
    }
}

/// Tab href, preserving nothing but the status selection.
fn tab_href(status: Option<OrderStatus>) -> String {
    status.map_or_else(
        || "/orders".to_owned(),
        |s| format!("/orders?status={}", s.as_str()),
    )
}

fn order_view(order: &Order, active_tab: Option<OrderStatus>, expanded: bool) -> OrderView {
    let toggle_href = if expanded {
        // Collapsing just drops the expand parameter.
        tab_href(active_tab)
    } else {
        let tab_param =
            active_tab.map_or_else(String::new, |s| format!("status={}&", s.as_str()));
        format!("/orders?{tab_param}expand={}", order.number)
    };

    OrderView {
        number: order.number.to_string(),
        placed_on: order.placed_on.to_string(),
        total: order.total.to_string(),
        status_label: order.status.label(),
        badge_class: badge_class(order.status),
        status_icon: status_icon(order.status),
        headline: order.status.headline(),
        description: order.status.description(),
        payment_method: order.payment_method.label(),
        expanded,
        toggle_href,
        toggle_label: if expanded { "Hide Details" } else { "View Details" },
        items: order
            .items
            .iter()
            .map(|item| OrderItemView {
                product_id: item.product_id.as_i32(),
                name: item.name.clone(),
                quantity: item.quantity,
                line_total: item.line_total().to_string(),
                image_url: item.image_url.clone(),
            })
            .collect(),
    }
}

/// Display the order history, filtered to the active status tab.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let active_tab = match query.status.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<OrderStatus>()
                .map_err(|_| AppError::BadRequest(format!("unknown order status: {raw}")))?,
        ),
    };

    let store = state.store().read().await;
    let orders: Vec<OrderView> = store
        .orders()
        .iter()
        .filter(|order| active_tab.is_none_or(|tab| order.status == tab))
        .map(|order| {
            let expanded = query.expand.as_deref() == Some(order.number.as_str());
            order_view(order, active_tab, expanded)
        })
        .collect();

    let mut tabs = vec![TabView {
        label: "All",
        href: tab_href(None),
        active: active_tab.is_none(),
    }];
    tabs.extend(OrderStatus::ALL.into_iter().map(|status| TabView {
        label: status.label(),
        href: tab_href(Some(status)),
        active: active_tab == Some(status),
    }));

    let empty_message = active_tab.map_or_else(
        || "You have no orders yet".to_owned(),
        |tab| format!("No {} orders", tab.label().to_lowercase()),
    );

    Ok(OrdersTemplate {
        tabs,
        orders,
        empty_message,
        cart_count: store.cart.item_count(),
    })
}
