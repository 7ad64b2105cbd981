use chrono::{DateTime, Utc};
use thiserror::Error;

use storefront_core::{Entity, OrderId};
use storefront_products::Product;
use storefront_products::product::CURRENCY;

/// Order-specific failures, kept apart from `DomainError` so callers can tell a
/// malformed order from a malformed product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("order quantity must be at least 1 (got {0})")]
    InvalidQuantity(i64),
}

/// A request for `quantity` units of an existing product.
///
/// The product is borrowed, never copied. `total_price` is computed once when the
/// order is placed. While the order lives the `&'a Product` borrow rules out price
/// changes, so a live order can never disagree with its product.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    id: OrderId,
    product: &'a Product,
    quantity: i64,
    total_price: f64,
    placed_at: DateTime<Utc>,
}

impl<'a> Order<'a> {
    pub fn new(product: &'a Product, quantity: i64) -> Result<Self, OrderError> {
        Self::at(product, quantity, Utc::now())
    }

    /// Like [`Order::new`] with an explicit timestamp.
    pub fn at(
        product: &'a Product,
        quantity: i64,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        Ok(Self {
            id: OrderId::new(),
            product,
            quantity,
            total_price: product.price() * quantity as f64,
            placed_at,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl Entity for Order<'_> {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Order<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order: {}, quantity: {}, total: {:.2} {CURRENCY}.",
            self.product.name(),
            self.quantity,
            self.total_price
        )
    }
}
