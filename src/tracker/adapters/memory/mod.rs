//! In-memory adapters for tests and local deterministic flows.

mod api;
mod listener;

pub use api::InMemoryTaskApi;
pub use listener::RecordingTransitionListener;
