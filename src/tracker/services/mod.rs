//! Application services for the tracker.

mod error;
mod in_flight;
mod store;
mod sync;
mod transitions;

pub use error::{BoardServiceError, BoardServiceResult};
pub use store::{ItemStore, ItemStoreError, ItemStoreResult, SharedItemStore, UpsertOutcome};
pub use sync::ItemSyncService;
pub use transitions::{TransitionEngine, TransitionOutcome};
