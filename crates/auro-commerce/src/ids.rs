//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an OrderId where a ProductId is expected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Prefix used for generated IDs.
            pub const PREFIX: &'static str = $prefix;

            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate an ID of the form `<prefix>-<unix millis>`.
            pub fn timestamped(at: DateTime<Utc>) -> Self {
                Self(format!("{}-{}", Self::PREFIX, at.timestamp_millis()))
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId, "prod");
define_id!(CategoryId, "cat");
define_id!(OrderId, "ord");
define_id!(PaymentId, "pay");
define_id!(CustomerId, "cust");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("ring-sol");
        assert_eq!(id.as_str(), "ring-sol");
    }

    #[test]
    fn test_id_timestamped() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(OrderId::timestamped(at).as_str(), "ord-1700000000123");
        assert_eq!(PaymentId::timestamped(at).as_str(), "pay-1700000000123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "neck-chain".into();
        assert_eq!(id.as_str(), "neck-chain");
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::new("rings");
        assert_eq!(format!("{}", id), "rings");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("charm-mina");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""charm-mina""#);
        let back: ProductId = serde_json::from_str(r#""charm-mina""#).unwrap();
        assert_eq!(back, id);
    }
}
