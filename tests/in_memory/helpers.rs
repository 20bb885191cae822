//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use taskdeck::tracker::domain::{
    BoardDomainError, MemberId, MemberRef, Priority, ProjectId, Status, SubItem, SubItemId,
    WorkItem, WorkItemId,
};

/// Builds a work item in project `project` with the given status.
///
/// # Errors
///
/// Returns an error if an identifier is blank.
pub fn work_item(id: &str, project: &str, status: Status) -> Result<WorkItem, BoardDomainError> {
    Ok(WorkItem::new(
        WorkItemId::new(id)?,
        ProjectId::new(project)?,
        format!("Task {id}"),
        &DefaultClock,
    )?
    .with_status(status))
}

/// Builds a sub-item owned by `parent`.
///
/// # Errors
///
/// Returns an error if an identifier is blank.
pub fn sub_item(id: &str, parent: &str) -> Result<SubItem, BoardDomainError> {
    SubItem::new(
        SubItemId::new(id)?,
        WorkItemId::new(parent)?,
        format!("Step {id}"),
        &DefaultClock,
    )
}

/// A small two-project board: three tasks in `web`, two in `ops`.
///
/// # Errors
///
/// Returns an error if an identifier is blank.
pub fn sample_board() -> Result<Vec<WorkItem>, BoardDomainError> {
    let dana = MemberRef::new(MemberId::new("dana")?, "Dana Reyes");
    Ok(vec![
        work_item("W1", "web", Status::Open)?
            .with_number(1)
            .with_priority(Priority::High)
            .with_assignee(dana.clone())
            .with_sub_items([sub_item("W1-a", "W1")?, sub_item("W1-b", "W1")?]),
        work_item("W2", "web", Status::InProgress)?
            .with_number(2)
            .with_priority(Priority::Medium),
        work_item("W3", "web", Status::Completed)?.with_number(3),
        work_item("O1", "ops", Status::Canceled)?
            .with_number(4)
            .with_opener(dana),
        work_item("O2", "ops", Status::InProgress)?.with_number(5),
    ])
}

/// Collects item identifiers as owned strings.
pub fn ids<'a>(items: impl IntoIterator<Item = &'a WorkItem>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.id().to_string())
        .collect()
}
