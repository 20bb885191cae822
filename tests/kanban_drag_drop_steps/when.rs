//! When steps for Kanban drag and drop BDD scenarios.

use super::world::KanbanWorld;
use rstest_bdd_macros::when;
use taskdeck::tracker::domain::{KanbanColumn, WorkItemId};
use taskdeck::view::{DragSession, DropOutcome};

#[when(r#""{id}" is dropped on the "{column}" lane"#)]
fn dropped_on_lane(world: &mut KanbanWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let target = WorkItemId::new(id)?;
    let result = world
        .engine
        .drop_on_column(&mut world.store, &target, &column)
        .map(DropOutcome::Moved);
    world.last_drop = Some(result);
    Ok(())
}

#[when(r#""{id}" is dragged over the "{column}" lane and released outside every lane"#)]
fn released_outside(
    world: &mut KanbanWorld,
    id: String,
    column: String,
) -> Result<(), eyre::Report> {
    let hovered = KanbanColumn::try_from(column.as_str())?;
    let mut session = DragSession::begin(&world.store, &WorkItemId::new(id)?)?;
    session.hover(Some(hovered));
    let outcome = session.drop_on(&world.engine, &mut world.store, None);
    world.last_drop = Some(outcome);
    Ok(())
}
