//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use stride_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new(1);
/// let order_id = OrderId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(LineId);

/// Error parsing an [`OrderNumber`] from a string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderNumberError {
    #[error("order number must start with \"ORD-\"")]
    MissingPrefix,
    #[error("order number must end in exactly four digits")]
    InvalidDigits,
}

/// Human-facing order reference in the `ORD-####` format.
///
/// Order numbers are display references, not database keys. They are
/// fabricated at checkout from a random integer and are not guaranteed
/// unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Build an order number from a numeric suffix, zero-padded to four
    /// digits. Values above 9999 wrap.
    #[must_use]
    pub fn new(suffix: u16) -> Self {
        Self(format!("ORD-{:04}", suffix % 10_000))
    }

    /// Parse an order number from its display form.
    ///
    /// # Errors
    ///
    /// Returns `OrderNumberError` if the prefix or digit group is malformed.
    pub fn parse(s: &str) -> Result<Self, OrderNumberError> {
        let digits = s.strip_prefix("ORD-").ok_or(OrderNumberError::MissingPrefix)?;
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OrderNumberError::InvalidDigits);
        }
        Ok(Self(s.to_owned()))
    }

    /// The display form, e.g. `ORD-1234`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(ProductId::new(7).to_string(), "7");
    }

    #[test]
    fn test_order_number_pads_to_four_digits() {
        assert_eq!(OrderNumber::new(3).as_str(), "ORD-0003");
        assert_eq!(OrderNumber::new(9999).as_str(), "ORD-9999");
    }

    #[test]
    fn test_order_number_wraps_above_9999() {
        assert_eq!(OrderNumber::new(10_001).as_str(), "ORD-0001");
    }

    #[test]
    fn test_parse_valid() {
        let number = OrderNumber::parse("ORD-1234").unwrap();
        assert_eq!(number, OrderNumber::new(1234));
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert_eq!(
            OrderNumber::parse("1234"),
            Err(OrderNumberError::MissingPrefix)
        );
    }

    #[test]
    fn test_parse_bad_digits() {
        assert_eq!(
            OrderNumber::parse("ORD-12x4"),
            Err(OrderNumberError::InvalidDigits)
        );
        assert_eq!(
            OrderNumber::parse("ORD-123"),
            Err(OrderNumberError::InvalidDigits)
        );
    }

    #[test]
    fn test_serde_transparent() {
        let number = OrderNumber::new(1234);
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"ORD-1234\"");
    }
}
