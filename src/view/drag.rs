//! Drag-and-drop sessions on the Kanban board.
//!
//! A session tracks one dragged card. Hovering is visual only; the store is
//! touched exactly once, when the session is dropped on a column, and not at
//! all when it is dropped outside every column or cancelled.

use crate::tracker::{
    domain::{KanbanColumn, WorkItemId},
    ports::TransitionListener,
    services::{BoardServiceResult, ItemStore, TransitionEngine, TransitionOutcome},
};
use mockable::Clock;

/// How a drop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped outside every column; no transition was requested.
    NoTarget,
    /// Dropped on a column; the engine's result for the single move.
    Moved(TransitionOutcome),
}

impl DropOutcome {
    /// Returns whether the drop changed the item's status.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Moved(TransitionOutcome::Applied(_)))
    }
}

/// An in-progress drag of one work item card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a drag session does nothing until it is dropped"]
pub struct DragSession {
    item: WorkItemId,
    origin: KanbanColumn,
    hovered: Option<KanbanColumn>,
}

impl DragSession {
    /// Picks up a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`](crate::tracker::services::BoardServiceError::NotFound)
    /// when the item is not in `store`.
    pub fn begin(store: &ItemStore, id: &WorkItemId) -> BoardServiceResult<Self> {
        let item = store.get_by_id(id)?;
        tracing::debug!(item = %id, origin = %item.kanban_column(), "drag started");
        Ok(Self {
            item: id.clone(),
            origin: item.kanban_column(),
            hovered: None,
        })
    }

    /// Returns the dragged item.
    #[must_use]
    pub const fn item(&self) -> &WorkItemId {
        &self.item
    }

    /// Returns the lane the card was picked up from.
    #[must_use]
    pub const fn origin(&self) -> KanbanColumn {
        self.origin
    }

    /// Returns the lane under the pointer, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<KanbanColumn> {
        self.hovered
    }

    /// Records the lane under the pointer. `None` means the pointer left
    /// every lane.
    pub const fn hover(&mut self, column: Option<KanbanColumn>) {
        self.hovered = column;
    }

    /// Ends the drag on `target`.
    ///
    /// `None` ends it outside every lane and requests no transition. A lane
    /// requests exactly one [`TransitionEngine::move_item`].
    ///
    /// # Errors
    ///
    /// Propagates the engine's error for the move.
    pub fn drop_on<L, C>(
        self,
        engine: &TransitionEngine<L, C>,
        store: &mut ItemStore,
        target: Option<KanbanColumn>,
    ) -> BoardServiceResult<DropOutcome>
    where
        L: TransitionListener,
        C: Clock + Send + Sync,
    {
        let Some(column) = target else {
            tracing::debug!(item = %self.item, "drag ended outside every lane");
            return Ok(DropOutcome::NoTarget);
        };
        engine
            .move_item(store, &self.item, column)
            .map(DropOutcome::Moved)
    }

    /// Ends the drag on the last hovered lane.
    ///
    /// # Errors
    ///
    /// As for [`Self::drop_on`].
    pub fn drop_on_hovered<L, C>(
        self,
        engine: &TransitionEngine<L, C>,
        store: &mut ItemStore,
    ) -> BoardServiceResult<DropOutcome>
    where
        L: TransitionListener,
        C: Clock + Send + Sync,
    {
        let target = self.hovered;
        self.drop_on(engine, store, target)
    }

    /// Abandons the drag without touching the store.
    pub fn cancel(self) {
        tracing::debug!(item = %self.item, "drag cancelled");
    }
}
