//! Shared world state for list pagination BDD scenarios.

use rstest::fixture;
use taskdeck::tracker::domain::WorkItem;
use taskdeck::view::{ListView, Page};

/// Scenario world for list behaviour tests.
pub struct ListWorld {
    pub items: Vec<WorkItem>,
    pub view: ListView,
}

impl ListWorld {
    /// Renders the current page.
    #[must_use]
    pub fn page(&self) -> Page<'_> {
        self.view.render(&self.items)
    }
}

impl Default for ListWorld {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            view: ListView::new(10),
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ListWorld {
    ListWorld::default()
}
