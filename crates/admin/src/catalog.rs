//! The admin's view of the product catalog.
//!
//! A thin wrapper over the shared seed data: case-insensitive name search
//! and row deletion are the only operations the back office performs.

use stride_core::ProductId;
use stride_core::catalog::Product;
use stride_core::seed;
use thiserror::Error;

/// Errors from catalog operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

/// The in-memory product table behind the admin dashboard.
#[derive(Debug)]
pub struct AdminCatalog {
    products: Vec<Product>,
}

impl AdminCatalog {
    /// Build a catalog from the mock seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: seed::catalog(),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products whose name contains `query`, case-insensitively. A blank
    /// query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Delete a product row.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` for unknown IDs.
    pub fn delete(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(CatalogError::ProductNotFound(id));
        }
        Ok(())
    }
}
