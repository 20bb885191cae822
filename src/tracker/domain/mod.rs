//! Domain model for work items, sub-items, and projects.
//!
//! Everything here is pure: no I/O, no locking, and time comes from an
//! injected [`mockable::Clock`].

mod error;
mod ids;
mod project;
mod status;
mod sub_item;
mod work_item;

pub use error::{
    BoardDomainError, InvalidTransition, ParseColumnError, ParsePriorityError, ParseStatusError,
};
pub use ids::{ItemKey, MemberId, ProjectId, SubItemId, WorkItemId};
pub use project::{MemberRef, Project, ProjectStatus, Scope};
pub use status::{
    KanbanColumn, Priority, Status, SubItemStatus, column_to_status, status_to_column,
};
pub use sub_item::{SubItem, SubItemPatch};
pub use work_item::WorkItem;
