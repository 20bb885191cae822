//! Kanban board projection.

use crate::tracker::domain::{KanbanColumn, WorkItem, WorkItemId};

/// One lane of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanLane<'a> {
    column: KanbanColumn,
    items: Vec<&'a WorkItem>,
}

impl<'a> KanbanLane<'a> {
    const fn empty(column: KanbanColumn) -> Self {
        Self {
            column,
            items: Vec::new(),
        }
    }

    /// Returns the lane's column.
    #[must_use]
    pub const fn column(&self) -> KanbanColumn {
        self.column
    }

    /// Returns the lane's items in store order.
    #[must_use]
    pub fn items(&self) -> &[&'a WorkItem] {
        &self.items
    }

    /// Returns the number of items in the lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the lane is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Work items grouped into the three Kanban lanes.
///
/// Placement uses each item's status, never a cached column. Canceled items
/// land in the backlog lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanBoard<'a> {
    backlog: KanbanLane<'a>,
    in_progress: KanbanLane<'a>,
    completed: KanbanLane<'a>,
}

impl<'a> KanbanBoard<'a> {
    /// Groups `items` by lane, keeping their relative order.
    #[must_use]
    pub fn project(items: impl IntoIterator<Item = &'a WorkItem>) -> Self {
        let mut board = Self {
            backlog: KanbanLane::empty(KanbanColumn::Backlog),
            in_progress: KanbanLane::empty(KanbanColumn::InProgress),
            completed: KanbanLane::empty(KanbanColumn::Completed),
        };
        for item in items {
            board.lane_mut(item.kanban_column()).items.push(item);
        }
        board
    }

    /// Returns the lane for `column`.
    #[must_use]
    pub const fn lane(&self, column: KanbanColumn) -> &KanbanLane<'a> {
        match column {
            KanbanColumn::Backlog => &self.backlog,
            KanbanColumn::InProgress => &self.in_progress,
            KanbanColumn::Completed => &self.completed,
        }
    }

    /// Returns the lanes in display order.
    #[must_use]
    pub const fn lanes(&self) -> [&KanbanLane<'a>; 3] {
        [&self.backlog, &self.in_progress, &self.completed]
    }

    /// Returns the number of items in `column`.
    #[must_use]
    pub fn count(&self, column: KanbanColumn) -> usize {
        self.lane(column).len()
    }

    /// Returns the number of items on the board.
    #[must_use]
    pub fn total(&self) -> usize {
        self.lanes().iter().map(|lane| lane.len()).sum()
    }

    /// Returns the lane holding the item, if it is on the board.
    #[must_use]
    pub fn column_of(&self, id: &WorkItemId) -> Option<KanbanColumn> {
        self.lanes()
            .into_iter()
            .find(|lane| lane.items.iter().any(|item| item.id() == id))
            .map(KanbanLane::column)
    }

    const fn lane_mut(&mut self, column: KanbanColumn) -> &mut KanbanLane<'a> {
        match column {
            KanbanColumn::Backlog => &mut self.backlog,
            KanbanColumn::InProgress => &mut self.in_progress,
            KanbanColumn::Completed => &mut self.completed,
        }
    }
}
