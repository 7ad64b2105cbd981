use chrono::{DateTime, Utc};

/// A catalog event (something that already happened).
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **named** with a stable dotted type (e.g. "products.product.created")
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier.
    fn event_type(&self) -> &'static str;

    /// When the event occurred (wall-clock time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
