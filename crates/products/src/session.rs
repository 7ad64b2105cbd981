//! Catalog-wide bookkeeping.
//!
//! Counters live in an explicit [`CatalogCounters`] value owned by a
//! [`CatalogSession`] and shared with every category it creates. They only grow;
//! [`CatalogCounters::reset`] is the single way back to zero.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::category::Category;
use crate::product::Product;

/// Number of categories created and products ever added.
#[derive(Debug, Default)]
pub struct CatalogCounters {
    categories: AtomicU64,
    products: AtomicU64,
}

/// Point-in-time copy of [`CatalogCounters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterSnapshot {
    pub category_count: u64,
    pub product_count: u64,
}

impl CatalogCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_category(&self, initial_products: usize) {
        self.categories.fetch_add(1, Ordering::Relaxed);
        self.products
            .fetch_add(initial_products as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_product(&self) {
        self.products.fetch_add(1, Ordering::Relaxed);
    }

    pub fn category_count(&self) -> u64 {
        self.categories.load(Ordering::Relaxed)
    }

    pub fn product_count(&self) -> u64 {
        self.products.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            category_count: self.category_count(),
            product_count: self.product_count(),
        }
    }

    /// Zero both counters (tests / operator action only).
    pub fn reset(&self) {
        self.categories.store(0, Ordering::Relaxed);
        self.products.store(0, Ordering::Relaxed);
    }
}

/// Owner of one set of counters; creates categories wired to them.
#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    counters: Arc<CatalogCounters>,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self) -> &Arc<CatalogCounters> {
        &self.counters
    }

    pub fn category(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
    ) -> Category {
        Category::new(Arc::clone(&self.counters), name, description, products)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    pub fn reset(&self) {
        self.counters.reset();
    }
}
