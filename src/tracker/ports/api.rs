//! Remote task API port.

use crate::tracker::domain::{
    ItemKey, MemberRef, Priority, ProjectId, Scope, Status, SubItem, SubItemId, SubItemPatch,
    WorkItem, WorkItemId,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for task API calls.
pub type TaskApiResult<T> = Result<T, CollaboratorError>;

/// Request/response contract of the persistence service.
///
/// Every response is the new authoritative state of the item it names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Lists work items for one project or for all projects.
    async fn fetch_items(&self, scope: &Scope<ProjectId>) -> TaskApiResult<Vec<WorkItem>>;

    /// Creates a work item.
    async fn create_item(&self, payload: NewWorkItem) -> TaskApiResult<WorkItem>;

    /// Sets a work item's status.
    async fn update_item_status(&self, id: &WorkItemId, status: Status)
    -> TaskApiResult<WorkItem>;

    /// Creates a sub-item under `parent`.
    async fn create_sub_item(
        &self,
        parent: &WorkItemId,
        payload: NewSubItem,
    ) -> TaskApiResult<SubItem>;

    /// Applies a partial update to a sub-item.
    async fn update_sub_item(&self, id: &SubItemId, patch: SubItemPatch)
    -> TaskApiResult<SubItem>;

    /// Deletes a work item and its sub-items.
    async fn delete_item(&self, id: &WorkItemId) -> TaskApiResult<()>;
}

/// Errors surfaced by task API adapters.
///
/// All of them are recoverable: the caller re-presents the unchanged store.
#[derive(Debug, Clone, Error)]
pub enum CollaboratorError {
    /// The call did not complete within the configured timeout.
    #[error("task API call timed out after {0:?}")]
    TimedOut(Duration),

    /// The remote side has no record of the item.
    #[error("task API has no record of {0}")]
    NotFound(ItemKey),

    /// The remote side refused the request.
    #[error("task API rejected the request: {0}")]
    Rejected(String),

    /// Transport or decoding failure.
    #[error("task API transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl CollaboratorError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

/// Payload for creating a work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkItem {
    /// Owning project.
    pub project_id: ProjectId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Priority.
    pub priority: Option<Priority>,
    /// Assignee.
    pub assignee: Option<MemberRef>,
    /// Member creating the item.
    pub opener: Option<MemberRef>,
}

impl NewWorkItem {
    /// Creates a payload with required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            priority: None,
            assignee: None,
            opener: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    /// Sets the opener.
    #[must_use]
    pub fn with_opener(mut self, opener: MemberRef) -> Self {
        self.opener = Some(opener);
        self
    }
}

/// Payload for creating a sub-item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubItem {
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Priority.
    pub priority: Option<Priority>,
    /// Assignee.
    pub assignee: Option<MemberRef>,
}

impl NewSubItem {
    /// Creates a payload with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            assignee: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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
}
