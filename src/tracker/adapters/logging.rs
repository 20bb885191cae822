//! Transition listener that reports events through `tracing`.

use crate::tracker::ports::{TransitionEvent, TransitionListener};

/// Logs each transition at `info` level under the `taskdeck::transitions`
/// target, for presentation layers that surface log lines as feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTransitionListener;

impl TransitionListener for TracingTransitionListener {
    fn on_transition(&self, event: &TransitionEvent) {
        tracing::info!(
            target: "taskdeck::transitions",
            item = %event.item,
            from = %event.from,
            to = %event.to,
            at = %event.occurred_at,
            "item moved"
        );
    }
}
