//! The checkout wizard state machine.
//!
//! A strictly linear flow: `Shipping(1) -> Payment(2) -> Confirmed(3)`,
//! with a single manual back transition from Payment to Shipping. Every
//! transition validates the current step, so an out-of-order form post
//! (stale tab, double submit) is rejected instead of corrupting the
//! session.

use serde::Deserialize;
use thiserror::Error;

use crate::payment::PaymentReceipt;

/// The three wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Confirmed,
}

impl CheckoutStep {
    /// 1-based step number for the progress indicator.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Confirmed => 3,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Confirmed => "Confirmation",
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from wizard transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A required shipping field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A transition was attempted from the wrong step.
    #[error("expected the {expected} step, but checkout is at {actual}")]
    WrongStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },
}

/// The shipping form contents. All fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl ShippingDetails {
    /// Field name / value pairs, for validation and display.
    fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("country", &self.country),
        ]
    }

    /// Server-side equivalent of the form's required-field validation:
    /// every field must be non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingField` naming the first empty field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        for (name, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// The wizard session: current step plus the data gathered so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutSession {
    step: CheckoutStep,
    shipping: Option<ShippingDetails>,
    receipt: Option<PaymentReceipt>,
}

impl CheckoutSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Shipping details entered so far (kept across the back transition).
    #[must_use]
    pub const fn shipping(&self) -> Option<&ShippingDetails> {
        self.shipping.as_ref()
    }

    /// The payment receipt, present only once confirmed.
    #[must_use]
    pub const fn receipt(&self) -> Option<&PaymentReceipt> {
        self.receipt.as_ref()
    }

    fn expect_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CheckoutError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Step 1 -> 2. Requires a complete shipping form.
    ///
    /// # Errors
    ///
    /// `MissingField` if validation fails, `WrongStep` if not at Shipping.
    pub fn submit_shipping(&mut self, details: ShippingDetails) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Shipping)?;
        details.validate()?;
        self.shipping = Some(details);
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Step 2 -> 1. The entered shipping details are kept.
    ///
    /// # Errors
    ///
    /// `WrongStep` if not at Payment.
    pub fn back_to_shipping(&mut self) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Payment)?;
        self.step = CheckoutStep::Shipping;
        Ok(())
    }

    /// Step 2 -> 3, recording the gateway receipt. Terminal.
    ///
    /// # Errors
    ///
    /// `WrongStep` if not at Payment.
    pub fn confirm(&mut self, receipt: PaymentReceipt) -> Result<(), CheckoutError> {
        self.expect_step(CheckoutStep::Payment)?;
        self.receipt = Some(receipt);
        self.step = CheckoutStep::Confirmed;
        Ok(())
    }

    /// Start a fresh checkout (after a confirmed order, when the shopper
    /// returns with a new cart).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
