//! Catalog events and observer hooks.

pub mod event;
pub mod observer;

pub use event::Event;
pub use observer::{Observer, ObserverSet, RecordingObserver, TracingObserver};
