//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::StorefrontConfig;
use crate::payment::PaymentSimulator;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store sits behind an async `RwLock`;
/// handlers take short guards and never hold one across the simulated
/// payment delay.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: RwLock<Store>,
    payments: PaymentSimulator,
}

impl AppState {
    /// Create application state seeded with the mock catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let payments = PaymentSimulator::new(config.payment_delay());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(Store::seeded()),
                payments,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared store.
    #[must_use]
    pub fn store(&self) -> &RwLock<Store> {
        &self.inner.store
    }

    /// Get a reference to the simulated payment gateway.
    #[must_use]
    pub fn payments(&self) -> &PaymentSimulator {
        &self.inner.payments
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_exposes_config_and_seeded_store() {
        let config = StorefrontConfig {
            base_url: "https://shop.example.com".to_owned(),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config);

        assert_eq!(state.config().base_url, "https://shop.example.com");
        assert_eq!(state.config().socket_addr().to_string(), "127.0.0.1:3000");
        assert!(!state.store().read().await.products().is_empty());
    }
}
