//! Given steps for Kanban drag and drop BDD scenarios.

use super::world::KanbanWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskdeck::tracker::domain::{ProjectId, Status, WorkItem, WorkItemId};

#[given(r#"a work item "{id}" with status "{status}""#)]
fn work_item_with_status(
    world: &mut KanbanWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = Status::try_from(status.as_str())?;
    let item = WorkItem::new(
        WorkItemId::new(id.as_str())?,
        ProjectId::new("board")?,
        format!("Card {id}"),
        &DefaultClock,
    )?
    .with_status(parsed);
    world.store.upsert(item);
    Ok(())
}
