//! Status enums for orders and payments.
//!
//! These are closed sets: an order can never carry a status outside the
//! enumerated values, and an unknown status string fails to parse instead
//! of flowing through the UI.

use serde::{Deserialize, Serialize};

/// Error parsing a status or payment method from its wire form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

/// Lifecycle status of a placed order.
///
/// Statuses in the order history are immutable mock data; no transitions
/// are ever triggered from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];

    /// Wire/query-string form, e.g. `processing`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
        }
    }

    /// Badge label shown next to the order number.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Returned => "Returned",
        }
    }

    /// One-line status headline for the order detail panel.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::Processing => "Order is being processed",
            Self::Shipped => "Order has been shipped",
            Self::Delivered => "Order has been delivered",
            Self::Cancelled => "Order has been cancelled",
            Self::Returned => "Order has been returned",
        }
    }

    /// Secondary status description for the order detail panel.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Processing => "Your order is being prepared for shipping",
            Self::Shipped => "Your order is on its way",
            Self::Delivered => "Your order has been delivered",
            Self::Cancelled => "Your order has been cancelled",
            Self::Returned => "Your return has been processed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// How an order was (nominally) paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
}

impl PaymentMethod {
    pub const ALL: [Self; 2] = [Self::CreditCard, Self::Paypal];

    /// Form value, matching the payment step radio inputs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::Paypal => "paypal",
        }
    }

    /// Human-readable label for the confirmation summary.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Paypal => "PayPal",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit-card" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::Paypal),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}
