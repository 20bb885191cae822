//! Work item aggregate root.

use super::{
    BoardDomainError, KanbanColumn, MemberRef, Priority, ProjectId, Status, SubItem, SubItemId,
    WorkItemId,
    project::{normalize_optional, normalize_title},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A task and its ordered sub-items.
///
/// `status` is authoritative. The Kanban column is derived from it; a cached
/// column may arrive from the task API, and when it disagrees with the
/// status it is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    id: WorkItemId,
    project_id: ProjectId,
    number: Option<u64>,
    title: String,
    description: Option<String>,
    status: Status,
    priority: Option<Priority>,
    kanban_column: Option<KanbanColumn>,
    assignee: Option<MemberRef>,
    opener: Option<MemberRef>,
    sub_items: Vec<SubItem>,
    comment_count: u32,
    attachment_count: u32,
    time_spent: Duration,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates an open work item with no sub-items.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        id: WorkItemId,
        project_id: ProjectId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id,
            project_id,
            number: None,
            title: normalize_title(title)?,
            description: None,
            status: Status::Open,
            priority: None,
            kanban_column: Some(Status::Open.column()),
            assignee: None,
            opener: None,
            sub_items: Vec::new(),
            comment_count: 0,
            attachment_count: 0,
            time_spent: Duration::ZERO,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Sets the display number.
    #[must_use]
    pub const fn with_number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_optional(description);
        self
    }

    /// Sets the status and the matching cached column.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self.kanban_column = Some(status.column());
        self
    }

    /// Overrides the cached column without touching the status.
    ///
    /// Models payloads whose cached column has gone stale.
    #[must_use]
    pub const fn with_cached_column(mut self, column: Option<KanbanColumn>) -> Self {
        self.kanban_column = column;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: MemberRef) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the member who opened the item.
    #[must_use]
    pub fn with_opener(mut self, opener: MemberRef) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Replaces the sub-item list.
    ///
    /// Sub-items whose back-reference names a different work item are
    /// dropped.
    #[must_use]
    pub fn with_sub_items(mut self, sub_items: impl IntoIterator<Item = SubItem>) -> Self {
        self.sub_items = sub_items
            .into_iter()
            .filter(|sub_item| sub_item.parent() == &self.id)
            .collect();
        self
    }

    /// Sets the comment and attachment counters.
    #[must_use]
    pub const fn with_counters(mut self, comments: u32, attachments: u32) -> Self {
        self.comment_count = comments;
        self.attachment_count = attachments;
        self
    }

    /// Sets the recorded time spent.
    #[must_use]
    pub const fn with_time_spent(mut self, time_spent: Duration) -> Self {
        self.time_spent = time_spent;
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &WorkItemId {
        &self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Returns the display number.
    #[must_use]
    pub const fn number(&self) -> Option<u64> {
        self.number
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the logical status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the Kanban column, always derived from the status.
    #[must_use]
    pub const fn kanban_column(&self) -> KanbanColumn {
        self.status.column()
    }

    /// Returns the cached column exactly as stored.
    #[must_use]
    pub const fn cached_column(&self) -> Option<KanbanColumn> {
        self.kanban_column
    }

    /// Returns whether a cached column is present and disagrees with the
    /// status.
    #[must_use]
    pub fn has_stale_column(&self) -> bool {
        self.kanban_column
            .is_some_and(|column| column != self.status.column())
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> Option<&MemberRef> {
        self.assignee.as_ref()
    }

    /// Returns the member who opened the item.
    #[must_use]
    pub const fn opener(&self) -> Option<&MemberRef> {
        self.opener.as_ref()
    }

    /// Returns the sub-items in order.
    #[must_use]
    pub fn sub_items(&self) -> &[SubItem] {
        &self.sub_items
    }

    /// Finds a sub-item by identifier.
    #[must_use]
    pub fn sub_item(&self, id: &SubItemId) -> Option<&SubItem> {
        self.sub_items.iter().find(|sub_item| sub_item.id() == id)
    }

    /// Returns whether this item owns the sub-item.
    #[must_use]
    pub fn has_sub_item(&self, id: &SubItemId) -> bool {
        self.sub_item(id).is_some()
    }

    /// Returns the number of comments.
    #[must_use]
    pub const fn comment_count(&self) -> u32 {
        self.comment_count
    }

    /// Returns the number of attachments.
    #[must_use]
    pub const fn attachment_count(&self) -> u32 {
        self.attachment_count
    }

    /// Returns the recorded time spent.
    #[must_use]
    pub const fn time_spent(&self) -> Duration {
        self.time_spent
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the status and the cached column together and returns the
    /// previous status.
    pub(crate) fn apply_status(&mut self, status: Status, clock: &impl Clock) -> Status {
        let previous = self.status;
        self.status = status;
        self.kanban_column = Some(status.column());
        self.updated_at = clock.utc();
        previous
    }

    pub(crate) fn sub_item_mut(&mut self, id: &SubItemId) -> Option<&mut SubItem> {
        self.sub_items.iter_mut().find(|sub_item| sub_item.id() == id)
    }

    /// Replaces a sub-item in place or appends it. Returns `true` when an
    /// existing sub-item was replaced.
    pub(crate) fn upsert_sub_item(&mut self, sub_item: SubItem) -> bool {
        if let Some(existing) = self.sub_item_mut(sub_item.id()) {
            *existing = sub_item;
            return true;
        }
        self.sub_items.push(sub_item);
        false
    }
}
