//! When steps for detail navigation BDD scenarios.

use super::world::NavigationWorld;
use rstest_bdd_macros::when;
use taskdeck::tracker::domain::{SubItemId, WorkItemId};

#[when(r#"the detail view of "{id}" is opened"#)]
fn detail_view_opened(world: &mut NavigationWorld, id: String) -> Result<(), eyre::Report> {
    let target = WorkItemId::new(id)?;
    world.stack.open(&world.store, &target)?;
    Ok(())
}

#[when(r#"the view drills into "{sub}""#)]
fn view_drills_into(world: &mut NavigationWorld, sub: String) -> Result<(), eyre::Report> {
    let target = SubItemId::new(sub)?;
    let result = world.stack.drill_into(&world.store, &target);
    world.last_request = Some(result);
    Ok(())
}

#[when("the detail view is closed")]
fn detail_view_closed(world: &mut NavigationWorld) {
    world.stack.close();
}
