//! Observer hooks (mechanics only).
//!
//! Builders that create catalog objects notify an [`ObserverSet`] after the fact.
//! Entities never notify anyone from their own constructors; instrumentation is
//! something a caller opts into by registering an observer.
//!
//! Delivery is synchronous and in registration order. Observers cannot fail or veto:
//! they see the event after the object exists.

use std::sync::{Arc, Mutex};

use crate::event::Event;

/// Receives events of type `E`.
pub trait Observer<E: Event> {
    fn notify(&self, event: &E);
}

impl<E: Event, O: Observer<E> + ?Sized> Observer<E> for Arc<O> {
    fn notify(&self, event: &E) {
        (**self).notify(event)
    }
}

/// Ordered fan-out to zero or more observers.
pub struct ObserverSet<E: Event> {
    observers: Vec<Box<dyn Observer<E>>>,
}

impl<E: Event> ObserverSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: impl Observer<E> + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&self, event: &E) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}

impl<E: Event> Default for ObserverSet<E> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<E: Event> core::fmt::Debug for ObserverSet<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Logs every event at `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<E: Event> Observer<E> for TracingObserver {
    fn notify(&self, event: &E) {
        tracing::debug!(
            event_type = event.event_type(),
            occurred_at = %event.occurred_at(),
            ?event,
            "catalog object created"
        );
    }
}

/// Keeps every received event in memory (tests/dev).
#[derive(Debug)]
pub struct RecordingObserver<E> {
    events: Mutex<Vec<E>>,
}

impl<E: Event> RecordingObserver<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in delivery order.
    ///
    /// A poisoned lock yields an empty snapshot.
    pub fn events(&self) -> Vec<E> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Event> Default for RecordingObserver<E> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<E: Event> Observer<E> for RecordingObserver<E> {
    fn notify(&self, event: &E) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Ping(u32);

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "test.ping"
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            DateTime::<Utc>::default()
        }
    }

    #[test]
    fn observers_receive_events_in_order() {
        let recorder = Arc::new(RecordingObserver::<Ping>::new());
        let mut set = ObserverSet::new();
        set.register(recorder.clone());
        set.register(TracingObserver);

        set.notify(&Ping(1));
        set.notify(&Ping(2));

        assert_eq!(set.len(), 2);
        assert_eq!(recorder.events(), vec![Ping(1), Ping(2)]);
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let set = ObserverSet::<Ping>::new();
        assert!(set.is_empty());
        set.notify(&Ping(7));
    }
}
