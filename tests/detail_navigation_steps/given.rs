//! Given steps for detail navigation BDD scenarios.

use super::world::NavigationWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskdeck::tracker::domain::{ProjectId, SubItem, SubItemId, WorkItem, WorkItemId};

#[given(r#"a work item "{id}" with sub-item "{sub}""#)]
fn work_item_with_sub_item(
    world: &mut NavigationWorld,
    id: String,
    sub: String,
) -> Result<(), eyre::Report> {
    let parent = WorkItemId::new(id.as_str())?;
    let child = SubItem::new(
        SubItemId::new(sub.as_str())?,
        parent.clone(),
        format!("Step {sub}"),
        &DefaultClock,
    )?;
    let item = WorkItem::new(
        parent,
        ProjectId::new("board")?,
        format!("Card {id}"),
        &DefaultClock,
    )?
    .with_sub_items([child]);
    world.store.upsert(item);
    Ok(())
}
