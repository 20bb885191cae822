//! Shared world state for Kanban drag and drop BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::tracker::{
    adapters::memory::RecordingTransitionListener,
    services::{BoardServiceError, ItemStore, TransitionEngine},
};
use taskdeck::view::DropOutcome;

/// Engine type used by the BDD world.
pub type TestEngine = TransitionEngine<RecordingTransitionListener, DefaultClock>;

/// Scenario world for drag and drop behaviour tests.
pub struct KanbanWorld {
    pub engine: TestEngine,
    pub listener: Arc<RecordingTransitionListener>,
    pub store: ItemStore,
    pub last_drop: Option<Result<DropOutcome, BoardServiceError>>,
}

impl KanbanWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let listener = Arc::new(RecordingTransitionListener::new());
        Self {
            engine: TransitionEngine::new(Arc::clone(&listener), Arc::new(DefaultClock)),
            listener,
            store: ItemStore::new(),
            last_drop: None,
        }
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}
