//! Status, priority, and Kanban column enums with the status/column mapping.
//!
//! The forward mapping [`status_to_column`] is total. The inverse
//! [`column_to_status`] has no column for [`Status::Canceled`], so canceled
//! work items park in the backlog lane and a round trip through the board
//! yields [`Status::Open`]. Canceled is reachable only through explicit
//! status selection, never through a drop.

use super::{InvalidTransition, ParseColumnError, ParsePriorityError, ParseStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical work item status.
///
/// Ordering follows declaration order and is used for sorting lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Work has not started.
    Open,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Completed,
    /// Work was abandoned.
    Canceled,
}

impl Status {
    /// Every status in declaration order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Completed, Self::Canceled];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Returns the Kanban column this status is displayed in.
    #[must_use]
    pub const fn column(self) -> KanbanColumn {
        status_to_column(self)
    }

    /// Widens a sub-item status.
    #[must_use]
    pub const fn from_sub_item(status: SubItemStatus) -> Self {
        match status {
            SubItemStatus::Open => Self::Open,
            SubItemStatus::InProgress => Self::InProgress,
            SubItemStatus::Completed => Self::Completed,
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "canceled" | "cancelled" => Ok(Self::Canceled),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-item status. Sub-items cannot be canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubItemStatus {
    /// Work has not started.
    Open,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Completed,
}

impl SubItemStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        Status::from_sub_item(self).as_str()
    }
}

impl From<SubItemStatus> for Status {
    fn from(status: SubItemStatus) -> Self {
        Self::from_sub_item(status)
    }
}

impl TryFrom<Status> for SubItemStatus {
    type Error = InvalidTransition;

    fn try_from(status: Status) -> Result<Self, Self::Error> {
        match status {
            Status::Open => Ok(Self::Open),
            Status::InProgress => Ok(Self::InProgress),
            Status::Completed => Ok(Self::Completed),
            Status::Canceled => Err(InvalidTransition::CanceledSubItem),
        }
    }
}

impl fmt::Display for SubItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work item priority.
///
/// Ordering follows urgency: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Medium urgency.
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kanban board lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KanbanColumn {
    /// Not started, including parked canceled items.
    Backlog,
    /// Work under way.
    InProgress,
    /// Finished work.
    Completed,
}

impl KanbanColumn {
    /// Lanes in display order.
    pub const ALL: [Self; 3] = [Self::Backlog, Self::InProgress, Self::Completed];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the status assigned to items dropped on this column.
    #[must_use]
    pub const fn status(self) -> Status {
        column_to_status(self)
    }
}

impl TryFrom<&str> for KanbanColumn {
    type Error = ParseColumnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseColumnError(value.to_owned())),
        }
    }
}

impl fmt::Display for KanbanColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a status to the lane it is displayed in.
#[must_use]
pub const fn status_to_column(status: Status) -> KanbanColumn {
    match status {
        Status::Open | Status::Canceled => KanbanColumn::Backlog,
        Status::InProgress => KanbanColumn::InProgress,
        Status::Completed => KanbanColumn::Completed,
    }
}

/// Maps a drop column to the status it assigns.
#[must_use]
pub const fn column_to_status(column: KanbanColumn) -> Status {
    match column {
        KanbanColumn::Backlog => Status::Open,
        KanbanColumn::InProgress => Status::InProgress,
        KanbanColumn::Completed => Status::Completed,
    }
}
