//! Products domain module.
//!
//! Product kinds, the field-bag factory, categories and the counters they keep.
//! Pure domain logic: no IO.

pub mod category;
pub mod event;
pub mod factory;
pub mod product;
pub mod session;

pub use category::Category;
pub use event::{ProductCreated, ProductEvent};
pub use factory::{BUILTIN_RULES, BuildFn, FieldBag, KindRule, ProductFactory};
pub use product::{LawnGrassSpec, Product, ProductKind, SmartphoneSpec};
pub use session::{CatalogCounters, CatalogSession, CounterSnapshot};
