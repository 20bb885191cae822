//! Error types for tracker domain validation, parsing, and transitions.

use super::{SubItemId, WorkItemId};
use thiserror::Error;

/// Errors returned while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was blank after trimming.
    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(&'static str),

    /// An item or project title was blank after trimming.
    #[error("title must not be empty")]
    EmptyTitle,
}

/// A status change or navigation step that the state machine rejects.
///
/// These are raised before any store mutation takes place.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidTransition {
    /// A drop event named a column with no inverse status mapping.
    #[error("no status maps to drop column '{0}'")]
    UnknownColumn(String),

    /// Sub-items have no canceled state.
    #[error("sub-items cannot be canceled")]
    CanceledSubItem,

    /// Drill-down targeted a sub-item the focused work item does not own.
    #[error("sub-item {sub_item} is not a child of work item {parent}")]
    NotAChild {
        /// Focused work item.
        parent: WorkItemId,
        /// Requested sub-item.
        sub_item: SubItemId,
    },

    /// Drill-down was attempted while a sub-item is focused.
    #[error("sub-item {0} has no children to drill into")]
    NotAWorkItem(SubItemId),

    /// Drill-down was attempted with no item focused.
    #[error("no item is focused")]
    NothingFocused,
}

/// Error returned while parsing work item statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing Kanban column names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown kanban column: {0}")]
pub struct ParseColumnError(pub String);

/// Error returned while parsing priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

impl From<ParseColumnError> for InvalidTransition {
    fn from(err: ParseColumnError) -> Self {
        Self::UnknownColumn(err.0)
    }
}
