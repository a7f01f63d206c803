//! Insertion-ordered associative container.
//!
//! This module provides:
//!
//! - [`ListMap`]: a key/value map stored as a linear sequence of entries
//! - [`Entry`]: a validated key/value pair
//! - [`MapError`]: the errors map operations report
//!
//! # Semantics
//!
//! | Operation   | Key present              | Key absent                |
//! |-------------|--------------------------|---------------------------|
//! | `add`       | `Err(DuplicateKey)`      | appended at the end       |
//! | `update`    | value replaced in place  | `Err(KeyNotFound)`        |
//! | `get`       | `Ok(&value)`             | `Err(KeyNotFound)`        |
//! | `remove`    | entry removed            | no-op                     |
//!
//! # Examples
//!
//! ```rust
//! use listmap::map::{Entry, ListMap};
//!
//! let mut map = ListMap::new();
//! map.add(1, "Hello")?;
//! map.add(2, "world")?;
//! map.add_entry(Entry::new(3, "Hey"))?;
//! map.add_entry(Entry::new(4, "Space"))?;
//! assert_eq!(map.count(), 4);
//!
//! map.update(&2, "Beautiful World")?;
//! assert_eq!(map.get(&2), Ok(&"Beautiful World"));
//!
//! map.remove(&4);
//! assert_eq!(map.keys(), vec![1, 2, 3]);
//! assert!(map.get(&4).unwrap_err().is_key_not_found());
//! # Ok::<(), listmap::map::MapError>(())
//! ```

#[cfg(feature = "tracing")]
macro_rules! trace_mutation {
    ($($argument:tt)*) => {
        tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_mutation {
    ($($argument:tt)*) => {};
}

mod entry;
mod error;
mod list_map;
mod nullable;

pub use entry::Entry;
pub use error::MapError;
pub use list_map::{INLINE_CAPACITY, IntoIter, Iter, ListMap};

static_assertions::assert_impl_all!(ListMap<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Entry<i32, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Entry<i32, String>: Default);
static_assertions::assert_not_impl_any!(ListMap<std::rc::Rc<i32>, String>: Send, Sync);

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use rstest::rstest;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    struct RecordedEvent {
        message: String,
        entries: Option<u64>,
    }

    impl Visit for RecordedEvent {
        fn record_u64(&mut self, field: &Field, value: u64) {
            if field.name() == "entries" {
                self.entries = Some(value);
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.message = format!("{value:?}");
            }
        }
    }

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<RecordedEvent>>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<RecordedEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &tracing::Event<'_>, _context: Context<'_, S>) {
            let mut recorded = RecordedEvent::default();
            event.record(&mut recorded);
            self.events.lock().unwrap().push(recorded);
        }
    }

    fn event(message: &str, entries: u64) -> RecordedEvent {
        RecordedEvent {
            message: message.to_string(),
            entries: Some(entries),
        }
    }

    fn record<F: FnOnce()>(recorder: &Recorder, action: F) {
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        tracing::subscriber::with_default(subscriber, action);
    }

    #[rstest]
    fn test_successful_mutations_emit_one_event_each() {
        let recorder = Recorder::default();
        let mut map = ListMap::new();

        record(&recorder, || map.add(1, "Hello").unwrap());
        assert_eq!(recorder.take(), vec![event("entry added", 1)]);

        record(&recorder, || map.add_entry(Entry::new(2, "world")).unwrap());
        assert_eq!(recorder.take(), vec![event("entry added", 2)]);

        record(&recorder, || {
            map.update(&2, "Beautiful World").unwrap();
        });
        assert_eq!(recorder.take(), vec![event("entry updated", 2)]);

        record(&recorder, || {
            map.remove(&1).unwrap();
        });
        assert_eq!(recorder.take(), vec![event("entry removed", 1)]);
    }

    #[rstest]
    fn test_rejected_and_absent_operations_emit_nothing() {
        let recorder = Recorder::default();
        let mut map: ListMap<i32, &str> = vec![(1, "Hello")].try_into().unwrap();

        record(&recorder, || {
            assert!(map.add(1, "again").is_err());
            assert!(map.update(&9, "missing").is_err());
            assert_eq!(map.remove(&9), None);
            assert!(map.add_nullable(None, Some("x")).is_err());
        });

        assert!(recorder.take().is_empty());
        assert_eq!(map.keys(), vec![1]);
    }
}
