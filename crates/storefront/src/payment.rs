//! Simulated payment gateway.
//!
//! There is no real gateway: charging waits a configured delay and then
//! fabricates an `ORD-####` order number from a random integer. The delay
//! is awaited inside the request future, so a client that navigates away
//! mid-payment drops the future and no state transition ever fires - the
//! cancellation path comes for free from structured async.

use std::time::Duration;

use rand::Rng;
use stride_core::{OrderNumber, PaymentMethod, Price};

/// What the gateway returns on success.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub order_number: OrderNumber,
    pub payment_method: PaymentMethod,
    pub total: Price,
}

/// The mock gateway. Cheap to clone; holds only the configured latency.
#[derive(Debug, Clone)]
pub struct PaymentSimulator {
    delay: Duration,
}

impl PaymentSimulator {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// "Charge" the shopper: wait out the simulated latency, then issue a
    /// receipt with a fabricated order number. Never fails - the mock
    /// gateway approves everything.
    pub async fn charge(&self, payment_method: PaymentMethod, total: Price) -> PaymentReceipt {
        tokio::time::sleep(self.delay).await;

        let suffix: u16 = rand::rng().random_range(0..10_000);
        let receipt = PaymentReceipt {
            order_number: OrderNumber::new(suffix),
            payment_method,
            total,
        };
        tracing::debug!(order_number = %receipt.order_number, "payment simulated");
        receipt
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_charge_waits_out_the_configured_delay() {
        let gateway = PaymentSimulator::new(Duration::from_millis(2_000));
        let started = tokio::time::Instant::now();
        let receipt = gateway
            .charge(PaymentMethod::CreditCard, Price::from_cents(32_317))
            .await;
        assert!(started.elapsed() >= Duration::from_millis(2_000));
        assert_eq!(receipt.total, Price::from_cents(32_317));
    }

    #[tokio::test]
    async fn test_receipt_order_number_is_well_formed() {
        let gateway = PaymentSimulator::new(Duration::ZERO);
        let receipt = gateway
            .charge(PaymentMethod::Paypal, Price::from_cents(1_000))
            .await;
        assert!(OrderNumber::parse(receipt.order_number.as_str()).is_ok());
        assert_eq!(receipt.payment_method, PaymentMethod::Paypal);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_charge_never_completes() {
        // Dropping the future models the shopper navigating away: the
        // pending transition is simply abandoned.
        let gateway = PaymentSimulator::new(Duration::from_secs(60));
        let charge = gateway.charge(PaymentMethod::CreditCard, Price::ZERO);
        tokio::pin!(charge);

        let raced = tokio::time::timeout(Duration::from_secs(1), &mut charge).await;
        assert!(raced.is_err());
        drop(charge);
    }
}
