//! Shared world state for detail navigation BDD scenarios.

use rstest::fixture;
use taskdeck::tracker::services::ItemStore;
use taskdeck::view::{NavigationResult, NavigationStack};

/// Scenario world for navigation behaviour tests.
#[derive(Default)]
pub struct NavigationWorld {
    pub store: ItemStore,
    pub stack: NavigationStack,
    pub last_request: Option<NavigationResult<()>>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> NavigationWorld {
    NavigationWorld::default()
}
