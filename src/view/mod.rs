//! Presentation projections over the tracker store.
//!
//! Nothing here renders; each type turns store contents into the shape a
//! view needs and owns the view-side state rules:
//!
//! - Lane grouping in [`kanban`]
//! - Filtering, sorting, and pagination in [`selection`]
//! - Detail drill-down in [`navigation`]
//! - Drag-and-drop sessions in [`drag`]

pub mod drag;
pub mod kanban;
pub mod navigation;
pub mod selection;

pub use drag::{DragSession, DropOutcome};
pub use kanban::{KanbanBoard, KanbanLane};
pub use navigation::{
    FocusedItem, NavigationError, NavigationResult, NavigationStack, NavigationState,
};
pub use selection::{
    FilterCriteria, ListView, Page, Sort, SortDirection, SortKey, select, select_sorted,
};

#[cfg(test)]
mod tests;
