//! Value objects: equality by value, not identity.
//!
//! `Price` and `Quantity` carry the two numeric invariants of the catalog. Once
//! constructed they are always valid, so the entities holding them never have to
//! re-check.

use serde::Deserialize;

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (which re-runs validation).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A strictly positive, finite unit price.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "price must be a finite number (got {value})"
            )));
        }
        if value <= 0.0 {
            return Err(DomainError::validation(format!(
                "price must be greater than zero (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `price * quantity` as a plain decimal.
    pub fn times(self, quantity: Quantity) -> f64 {
        self.0 * quantity.value() as f64
    }
}

impl ValueObject for Price {}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Price::new(raw).map_err(serde::de::Error::custom)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A strictly positive item count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be at least 1 (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Quantity::new(raw).map_err(serde::de::Error::custom)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn price_rejects_zero_negative_and_nan() {
        assert!(Price::new(0.0).unwrap_err().is_validation());
        assert!(Price::new(-50.0).unwrap_err().is_validation());
        assert!(Price::new(f64::NAN).unwrap_err().is_validation());
        assert!(Price::new(f64::INFINITY).unwrap_err().is_validation());
    }

    #[test]
    fn price_accepts_extreme_positive_values() {
        assert_eq!(Price::new(1e10).unwrap().value(), 1e10);
        assert_eq!(Price::new(1e-15).unwrap().value(), 1e-15);
    }

    #[test]
    fn price_renders_two_decimals() {
        assert_eq!(Price::new(100.0).unwrap().to_string(), "100.00");
        assert_eq!(Price::new(1500.5).unwrap().to_string(), "1500.50");
    }

    #[test]
    fn quantity_rejects_zero_and_negative() {
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(-5).is_err());
        assert_eq!(Quantity::new(1).unwrap().value(), 1);
    }

    #[test]
    fn deserialize_runs_validation() {
        let err = serde_json::from_str::<Price>("-1.0");
        assert!(err.is_err());
        let q: Quantity = serde_json::from_str("3").unwrap();
        assert_eq!(q.value(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any non-positive quantity is rejected, any positive one round-trips.
        #[test]
        fn quantity_validation_matches_sign(value in -1_000i64..1_000i64) {
            match Quantity::new(value) {
                Ok(q) => prop_assert_eq!(q.value(), value),
                Err(_) => prop_assert!(value <= 0),
            }
        }

        /// Property: `times` is plain multiplication.
        #[test]
        fn times_multiplies(price in 0.01f64..1_000_000.0, qty in 1i64..10_000) {
            let p = Price::new(price).unwrap();
            let q = Quantity::new(qty).unwrap();
            prop_assert_eq!(p.times(q), price * qty as f64);
        }
    }
}
