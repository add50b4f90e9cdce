//! Stride Core - Shared domain library.
//!
//! This crate provides the domain model used by both Stride binaries:
//! - `storefront` - Public-facing shop (home, catalog, cart, checkout, orders)
//! - `admin` - Internal product administration panel
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! async. Everything here is synchronously computable from its inputs, which
//! is what makes the catalog pipeline and cart math directly unit-testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, order numbers and status enums
//! - [`catalog`] - Products, categories and the filter/sort pipeline
//! - [`cart`] - Cart lines and total derivation
//! - [`order`] - Immutable order records
//! - [`seed`] - Hard-coded mock fixtures standing in for a real data source

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod seed;
pub mod types;

pub use types::*;
