//! Listener that records transition events for later inspection.

use crate::tracker::ports::{TransitionEvent, TransitionListener};
use std::sync::{Arc, Mutex};

/// Thread-safe in-memory event recorder.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransitionListener {
    events: Arc<Mutex<Vec<TransitionEvent>>>,
}

impl RecordingTransitionListener {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far, oldest first.
    ///
    /// A poisoned lock yields an empty list.
    #[must_use]
    pub fn events(&self) -> Vec<TransitionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Returns the number of events recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map_or(0, |events| events.len())
    }

    /// Returns whether no events were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards recorded events.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl TransitionListener for RecordingTransitionListener {
    fn on_transition(&self, event: &TransitionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
