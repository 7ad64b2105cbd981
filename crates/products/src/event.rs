//! Events emitted when products are built.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::ProductId;
use storefront_events::Event;

use crate::product::Product;

/// Event: ProductCreated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
    pub kind: &'static str,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

impl ProductCreated {
    /// `kind` is the factory rule that built the product.
    pub fn new(product: &Product, kind: &'static str) -> Self {
        Self {
            product_id: product.id_typed(),
            kind,
            name: product.name().to_string(),
            price: product.price(),
            quantity: product.quantity(),
            occurred_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProductEvent {
    ProductCreated(ProductCreated),
}

impl Event for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::ProductCreated(_) => "products.product.created",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::ProductCreated(e) => e.occurred_at,
        }
    }
}
