//! Application state shared across admin handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::AdminCatalog;
use crate::config::AdminConfig;

/// Application state shared across all handlers. Cheaply cloneable via
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: RwLock<AdminCatalog>,
}

impl AppState {
    /// Create application state seeded with the mock catalog.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(AdminCatalog::seeded()),
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &RwLock<AdminCatalog> {
        &self.inner.catalog
    }
}
