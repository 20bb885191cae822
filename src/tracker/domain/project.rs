//! Projects, team member references, and project scoping.

use super::{BoardDomainError, MemberId, ProjectId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shared reference to a team member.
///
/// Members are not owned by projects or items; the same member may appear
/// on many of both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberRef {
    /// Member identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Avatar location, if the member has one.
    pub avatar: Option<String>,
}

impl MemberRef {
    /// Creates a member reference without an avatar.
    #[must_use]
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_owned(),
            avatar: None,
        }
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Not yet started.
    Planned,
    /// Under way.
    Active,
    /// Temporarily halted.
    OnHold,
    /// Finished.
    Completed,
}

/// Project grouping work items and team members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: ProjectStatus,
    members: Vec<MemberRef>,
}

impl Project {
    /// Creates a planned project with no members.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(id: ProjectId, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id,
            title: normalize_title(title)?,
            description: None,
            due_date: None,
            status: ProjectStatus::Planned,
            members: Vec::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_optional(description);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the team members, dropping duplicates by member id.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberRef>) -> Self {
        self.members.clear();
        for member in members {
            if !self.has_member(&member.id) {
                self.members.push(member);
            }
        }
        self
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
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

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the team members.
    #[must_use]
    pub fn members(&self) -> &[MemberRef] {
        &self.members
    }

    /// Returns whether the member belongs to this project.
    #[must_use]
    pub fn has_member(&self, member_id: &MemberId) -> bool {
        self.members.iter().any(|member| &member.id == member_id)
    }
}

/// A selector that either matches everything or one specific value.
///
/// Used for the "all" sentinel in project fetches and list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope<T> {
    /// Matches every value.
    #[default]
    All,
    /// Matches exactly this value.
    Only(T),
}

impl<T: PartialEq> Scope<T> {
    /// Returns whether `value` is selected.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Returns whether an optional value is selected.
    ///
    /// `All` matches a missing value; `Only` never does.
    #[must_use]
    pub fn matches_optional(&self, value: Option<&T>) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => value == Some(expected),
        }
    }

    /// Returns whether this scope is the `All` sentinel.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

pub(super) fn normalize_title(title: impl Into<String>) -> Result<String, BoardDomainError> {
    let raw = title.into();
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(BoardDomainError::EmptyTitle);
    }
    Ok(normalized.to_owned())
}

pub(super) fn normalize_optional(value: impl Into<String>) -> Option<String> {
    let raw = value.into();
    let normalized = raw.trim();
    (!normalized.is_empty()).then(|| normalized.to_owned())
}
