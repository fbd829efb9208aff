//! Process-wide accumulator for processed items
//!
//! The accumulator is the only shared mutable state of the batch pipeline.
//! It is created once at service startup and injected into the coordinator;
//! its contents survive across batch invocations and are never reset.

use crate::domain::item::WorkItem;
use std::sync::Mutex;

/// Thread-safe, ordered, append-only sink for processed items
///
/// Holds every item successfully processed by any batch call since process
/// start, in fold order, together with a running count. Append and increment
/// happen under one lock, so the pair is atomic even when concurrent batch
/// calls interleave their folds. Invariant: the sequence length always equals
/// the counter.
///
/// Items are appended again on every successful re-processing; duplicates
/// across repeated batch calls are expected and are not deduplicated.
pub struct BatchAccumulator {
    inner: Mutex<AccumulatorInner>,
}

#[derive(Default)]
struct AccumulatorInner {
    items: Vec<WorkItem>,
    count: u64,
}

impl BatchAccumulator {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(AccumulatorInner::default()),
        }
    }

    /// Appends a processed item and bumps the running count
    pub fn record(&self, item: WorkItem) {
        let mut inner = self.inner.lock().expect("accumulator lock poisoned");
        inner.items.push(item);
        inner.count += 1;
    }

    /// Returns a copy of the accumulated sequence, in append order
    pub fn snapshot(&self) -> Vec<WorkItem> {
        self.inner
            .lock()
            .expect("accumulator lock poisoned")
            .items
            .clone()
    }

    /// Total number of items ever recorded
    pub fn count(&self) -> u64 {
        self.inner.lock().expect("accumulator lock poisoned").count
    }
}

impl Default for BatchAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
