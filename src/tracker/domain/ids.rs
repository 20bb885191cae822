//! Identifier types for the tracker domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declares an opaque, non-empty string identifier.
///
/// Identifiers are issued by the external task API, so they are kept as
/// strings rather than parsed into UUIDs. Locally generated identifiers use
/// UUID v4 text.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns [`BoardDomainError::EmptyIdentifier`] when the value is
            /// blank after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
                let raw = value.into();
                let normalized = raw.trim();
                if normalized.is_empty() {
                    return Err(BoardDomainError::EmptyIdentifier($kind));
                }
                Ok(Self(normalized.to_owned()))
            }

            /// Generates a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a work item (task).
    WorkItemId,
    "work item"
);

string_id!(
    /// Identifier of a sub-item (subtask).
    SubItemId,
    "sub-item"
);

string_id!(
    /// Identifier of a project.
    ProjectId,
    "project"
);

string_id!(
    /// Identifier of a team member.
    MemberId,
    "member"
);

/// Address of any item held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKey {
    /// A top-level work item.
    WorkItem {
        /// Work item identifier.
        id: WorkItemId,
    },
    /// A sub-item owned by a work item.
    SubItem {
        /// Owning work item.
        parent: WorkItemId,
        /// Sub-item identifier.
        id: SubItemId,
    },
}

impl ItemKey {
    /// Addresses a work item.
    #[must_use]
    pub const fn work_item(id: WorkItemId) -> Self {
        Self::WorkItem { id }
    }

    /// Addresses a sub-item under its owning work item.
    #[must_use]
    pub const fn sub_item(parent: WorkItemId, id: SubItemId) -> Self {
        Self::SubItem { parent, id }
    }

    /// Returns the work item that owns this key, or the work item itself.
    #[must_use]
    pub const fn root(&self) -> &WorkItemId {
        match self {
            Self::WorkItem { id } | Self::SubItem { parent: id, .. } => id,
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkItem { id } => write!(f, "work item {id}"),
            Self::SubItem { parent, id } => write!(f, "sub-item {id} of work item {parent}"),
        }
    }
}
