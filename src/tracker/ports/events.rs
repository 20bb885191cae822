//! Advisory transition feed for presentation feedback.

use crate::tracker::domain::{ItemKey, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A status change applied to the store.
///
/// Sub-item statuses are widened to [`Status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Item whose status changed.
    pub item: ItemKey,
    /// Status before the change.
    pub from: Status,
    /// Status after the change.
    pub to: Status,
    /// Clock time at which the change was applied.
    pub occurred_at: DateTime<Utc>,
}

/// Receives transition events.
///
/// Listeners are advisory: the store is already updated when they run, and
/// nothing they do can undo or fail the transition.
pub trait TransitionListener: Send + Sync {
    /// Called once per applied transition. Idempotent no-op moves are not
    /// reported.
    fn on_transition(&self, event: &TransitionEvent);
}

/// Listener that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransitionListener;

impl TransitionListener for NoopTransitionListener {
    fn on_transition(&self, _event: &TransitionEvent) {}
}
