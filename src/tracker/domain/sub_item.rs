//! Sub-items owned by a work item.

use super::{
    BoardDomainError, MemberRef, Priority, SubItemId, SubItemStatus, WorkItemId,
    project::{normalize_optional, normalize_title},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A subtask.
///
/// The owning [`WorkItem`](super::WorkItem) holds the sub-item list; the
/// `parent` field is a plain back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    id: SubItemId,
    parent: WorkItemId,
    title: String,
    description: Option<String>,
    status: SubItemStatus,
    priority: Option<Priority>,
    assignee: Option<MemberRef>,
    time_spent: Duration,
    comment_count: u32,
    attachment_count: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SubItem {
    /// Creates an open sub-item.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        id: SubItemId,
        parent: WorkItemId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id,
            parent,
            title: normalize_title(title)?,
            description: None,
            status: SubItemStatus::Open,
            priority: None,
            assignee: None,
            time_spent: Duration::ZERO,
            comment_count: 0,
            attachment_count: 0,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_optional(description);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: SubItemStatus) -> Self {
        self.status = status;
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

    /// Sets the recorded time spent.
    #[must_use]
    pub const fn with_time_spent(mut self, time_spent: Duration) -> Self {
        self.time_spent = time_spent;
        self
    }

    /// Sets the comment and attachment counters.
    #[must_use]
    pub const fn with_counters(mut self, comments: u32, attachments: u32) -> Self {
        self.comment_count = comments;
        self.attachment_count = attachments;
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &SubItemId {
        &self.id
    }

    /// Returns the owning work item identifier.
    #[must_use]
    pub const fn parent(&self) -> &WorkItemId {
        &self.parent
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

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> SubItemStatus {
        self.status
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

    /// Returns the recorded time spent.
    #[must_use]
    pub const fn time_spent(&self) -> Duration {
        self.time_spent
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

    /// Sets the status and returns the previous one.
    pub(crate) fn apply_status(
        &mut self,
        status: SubItemStatus,
        clock: &impl Clock,
    ) -> SubItemStatus {
        let previous = self.status;
        self.status = status;
        self.updated_at = clock.utc();
        previous
    }

    /// Applies every field present in `patch`.
    ///
    /// The patch is validated in full before any field is written.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the patch carries a blank
    /// title.
    pub fn apply_patch(
        &mut self,
        patch: SubItemPatch,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        let title = patch.title.map(normalize_title).transpose()?;
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(description) = patch.description {
            self.description = normalize_optional(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = Some(priority);
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = Some(assignee);
        }
        if let Some(time_spent) = patch.time_spent {
            self.time_spent = time_spent;
        }
        self.updated_at = clock.utc();
        Ok(())
    }
}

/// Partial update for a sub-item; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItemPatch {
    /// New title.
    pub title: Option<String>,
    /// New description; an empty string clears it.
    pub description: Option<String>,
    /// New status.
    pub status: Option<SubItemStatus>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New assignee.
    pub assignee: Option<MemberRef>,
    /// New time-spent value.
    pub time_spent: Option<Duration>,
}

impl SubItemPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: SubItemStatus) -> Self {
        self.status = Some(status);
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

    /// Sets the time spent.
    #[must_use]
    pub const fn with_time_spent(mut self, time_spent: Duration) -> Self {
        self.time_spent = Some(time_spent);
        self
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.time_spent.is_none()
    }
}
