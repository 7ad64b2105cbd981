use std::iter::FusedIterator;
use std::sync::Arc;

use serde_json::Value;

use storefront_core::{CategoryId, DomainResult, Entity, ProductId};

use crate::factory::ProductFactory;
use crate::product::{Product, UNIT};
use crate::session::CatalogCounters;

/// An ordered, mutable collection of products.
///
/// Insertion order is preserved in iteration and in [`Category::formatted_products`].
/// Every product that enters a category (at construction or through `add_*`) is
/// counted in the shared [`CatalogCounters`]; duplicates count again.
#[derive(Debug)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    products: Vec<Product>,
    counters: Arc<CatalogCounters>,
}

impl Category {
    pub fn new(
        counters: Arc<CatalogCounters>,
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
    ) -> Self {
        counters.record_category(products.len());

        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            products,
            counters,
        }
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with the given id, for in-place updates such as a price change.
    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id_typed() == id)
    }

    /// Append a product of any kind.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
        self.counters.record_product();
    }

    /// Build a product from an untyped value and append it.
    ///
    /// Non-object values are a type mismatch; nothing is appended or counted on error.
    pub fn add_value(&mut self, factory: &ProductFactory, value: &Value) -> DomainResult<&Product> {
        let product = factory.build_value(value)?;
        self.add_product(product);
        let last = self.products.len() - 1;
        Ok(&self.products[last])
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.products.iter(),
        }
    }

    /// One rendered product per line, in insertion order.
    pub fn formatted_products(&self) -> String {
        self.products
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Sum of all quantities. Widened to `i128` so any mix of valid quantities fits.
    pub fn total_quantity(&self) -> i128 {
        self.products.iter().map(|p| i128::from(p.quantity())).sum()
    }

    /// Quantity-weighted average price, rounded to 2 decimals.
    ///
    /// Empty categories (or a zero total quantity) yield `0.0`.
    pub fn middle_price(&self) -> f64 {
        let total_quantity = self.total_quantity();
        if total_quantity == 0 {
            return 0.0;
        }
        let total_value: f64 = self.products.iter().map(Product::stock_value).sum();
        round2(total_value / total_quantity as f64)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, products in stock: {} {UNIT}.",
            self.name,
            self.total_quantity()
        )
    }
}

/// Borrowing iterator over a category's products.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, Product>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a Product;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
