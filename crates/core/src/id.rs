//! Strongly-typed identifiers used across the catalog.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a product. Two products with identical fields still differ by id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

/// Identifier of a category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

/// Identifier of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

// Constructor and string conversions shared by the id newtypes.
macro_rules! catalog_id {
    ($t:ident) => {
        impl $t {
            /// Fresh time-ordered (v7) id.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::from_str(s)
                    .map(Self)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {e}", stringify!($t))))
            }
        }
    };
}

catalog_id!(ProductId);
catalog_id!(CategoryId);
catalog_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(ProductId::new(), ProductId::new());
    }

    #[test]
    fn parse_round_trips_display() {
        let id = CategoryId::new();
        let parsed: CategoryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<OrderId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("OrderId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }
}
