//! Then steps for detail navigation BDD scenarios.

use super::world::NavigationWorld;
use rstest_bdd_macros::then;
use taskdeck::tracker::domain::{InvalidTransition, ItemKey, SubItemId, WorkItemId};
use taskdeck::view::{FocusedItem, NavigationError};

#[then(r#"the focused item is sub-item "{sub}" of "{id}""#)]
fn focused_sub_item(world: &NavigationWorld, sub: String, id: String) -> Result<(), eyre::Report> {
    let expected = ItemKey::sub_item(WorkItemId::new(id)?, SubItemId::new(sub)?);
    let focused = world.stack.focused();
    eyre::ensure!(
        focused == Some(&expected),
        "expected {expected} to be focused, found {focused:?}"
    );
    Ok(())
}

#[then(r#"the focused item is work item "{id}""#)]
fn focused_work_item(world: &NavigationWorld, id: String) -> Result<(), eyre::Report> {
    let expected = WorkItemId::new(id)?;
    match world.stack.resolve(&world.store)? {
        FocusedItem::WorkItem(item) if item.id() == &expected => Ok(()),
        other => Err(eyre::eyre!("expected work item {expected}, found {other:?}")),
    }
}

#[then("the return stack depth is {depth:usize}")]
fn return_stack_depth(world: &NavigationWorld, depth: usize) -> Result<(), eyre::Report> {
    let actual = world.stack.return_stack().len();
    eyre::ensure!(actual == depth, "expected depth {depth}, found {actual}");
    Ok(())
}

#[then("navigation is closed")]
fn navigation_closed(world: &NavigationWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.stack.is_closed(), "navigation is still open");
    Ok(())
}

#[then("the drill-down is rejected as not a child")]
fn drill_down_rejected(world: &NavigationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_request
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drill-down result"))?;
    if !matches!(
        result,
        Err(NavigationError::InvalidTransition(
            InvalidTransition::NotAChild { .. }
        ))
    ) {
        return Err(eyre::eyre!("expected NotAChild error, got {result:?}"));
    }
    Ok(())
}
