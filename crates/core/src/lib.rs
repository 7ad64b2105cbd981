//! `storefront-core`: catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error model,
//! identifiers, and the validated numeric value objects.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, OrderId, ProductId};
pub use value_object::{Price, Quantity, ValueObject};
