//! Given steps for list pagination BDD scenarios.

use super::world::ListWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskdeck::tracker::domain::{ProjectId, WorkItem, WorkItemId};

#[given("{count:usize} work items in the store")]
fn work_items_in_store(world: &mut ListWorld, count: usize) -> Result<(), eyre::Report> {
    let project = ProjectId::new("board")?;
    for n in 1..=count {
        let item = WorkItem::new(
            WorkItemId::new(format!("W{n}"))?,
            project.clone(),
            format!("Task {n}"),
            &DefaultClock,
        )?;
        world.items.push(item);
    }
    Ok(())
}

#[given("a page size of {size:usize}")]
fn page_size_of(world: &mut ListWorld, size: usize) {
    world.view.set_page_size(size);
}
