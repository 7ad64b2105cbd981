//! Sales module: orders placed against catalog products.
//!
//! Pure domain logic only: no IO.

pub mod order;

pub use order::{Order, OrderError};
