//! Then steps for Kanban drag and drop BDD scenarios.

use super::world::KanbanWorld;
use rstest_bdd_macros::then;
use taskdeck::tracker::{
    domain::{InvalidTransition, KanbanColumn, Status, WorkItemId},
    services::BoardServiceError,
};
use taskdeck::view::KanbanBoard;

#[then(r#""{id}" has status "{status}""#)]
fn has_status(world: &KanbanWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())?;
    let item = world.store.get_by_id(&WorkItemId::new(id)?)?;
    eyre::ensure!(
        item.status() == expected,
        "expected status {expected}, found {}",
        item.status()
    );
    Ok(())
}

#[then(r#""{id}" is shown in the "{column}" lane"#)]
fn shown_in_lane(world: &KanbanWorld, id: String, column: String) -> Result<(), eyre::Report> {
    let expected = KanbanColumn::try_from(column.as_str())?;
    let board = KanbanBoard::project(world.store.get_all());
    let actual = board.column_of(&WorkItemId::new(id)?);
    eyre::ensure!(
        actual == Some(expected),
        "expected lane {expected}, found {actual:?}"
    );
    Ok(())
}

#[then("the listener recorded {count:usize} events")]
fn listener_recorded(world: &KanbanWorld, count: usize) -> Result<(), eyre::Report> {
    let recorded = world.listener.len();
    eyre::ensure!(recorded == count, "expected {count} events, found {recorded}");
    Ok(())
}

#[then("the drop is rejected as an invalid transition")]
fn drop_rejected(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_drop
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::InvalidTransition(
            InvalidTransition::UnknownColumn(_)
        ))
    ) {
        return Err(eyre::eyre!("expected UnknownColumn error, got {result:?}"));
    }
    Ok(())
}
