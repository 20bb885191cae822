//! Port contracts for the tracker.
//!
//! Ports define the collaborators the core depends on but does not
//! implement: the remote task API and the advisory transition feed.

pub mod api;
pub mod events;

pub use api::{CollaboratorError, NewSubItem, NewWorkItem, TaskApi, TaskApiResult};
#[cfg(test)]
pub use api::MockTaskApi;
pub use events::{NoopTransitionListener, TransitionEvent, TransitionListener};
