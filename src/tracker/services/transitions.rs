//! Transition engine: validated status changes on store items.

use super::{BoardServiceError, BoardServiceResult, ItemStore};
use crate::tracker::{
    domain::{
        InvalidTransition, ItemKey, KanbanColumn, Status, SubItemId, SubItemStatus, WorkItemId,
        column_to_status,
    },
    ports::{TransitionEvent, TransitionListener},
};
use mockable::Clock;
use std::sync::Arc;

/// Result of a transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The item already had the requested status; nothing changed and no
    /// event was emitted.
    Unchanged,
    /// The status changed and the event was delivered to the listener.
    Applied(TransitionEvent),
}

impl TransitionOutcome {
    /// Returns the emitted event, if any.
    #[must_use]
    pub const fn event(&self) -> Option<&TransitionEvent> {
        match self {
            Self::Unchanged => None,
            Self::Applied(event) => Some(event),
        }
    }
}

/// Applies status changes to items in an [`ItemStore`].
///
/// Status and Kanban column are written together inside a single `&mut`
/// borrow of the store, so no caller can observe one without the other.
#[derive(Clone)]
pub struct TransitionEngine<L, C>
where
    L: TransitionListener,
    C: Clock + Send + Sync,
{
    listener: Arc<L>,
    clock: Arc<C>,
}

impl<L, C> TransitionEngine<L, C>
where
    L: TransitionListener,
    C: Clock + Send + Sync,
{
    /// Creates an engine that reports to `listener`.
    #[must_use]
    pub const fn new(listener: Arc<L>, clock: Arc<C>) -> Self {
        Self { listener, clock }
    }

    /// Moves a work item to a Kanban column, as on a drop event.
    ///
    /// The new status is the column's inverse mapping, so a drop can never
    /// produce [`Status::Canceled`]. Moving an item to the column its status
    /// already maps back to is a no-op.
    ///
    /// A canceled item is shown in [`KanbanColumn::Backlog`], but backlog maps
    /// back to [`Status::Open`]. Dropping a canceled card on its own backlog
    /// lane therefore reopens it and emits a `Canceled -> Open` event.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the item is absent.
    pub fn move_item(
        &self,
        store: &mut ItemStore,
        id: &WorkItemId,
        target: KanbanColumn,
    ) -> BoardServiceResult<TransitionOutcome> {
        self.apply_work_item_status(store, id, column_to_status(target))
    }

    /// Moves a work item to a column named by the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::InvalidTransition`] when the name maps to
    /// no column (including `"canceled"`), before the store is read, or
    /// [`BoardServiceError::NotFound`] when the item is absent.
    pub fn drop_on_column(
        &self,
        store: &mut ItemStore,
        id: &WorkItemId,
        column: &str,
    ) -> BoardServiceResult<TransitionOutcome> {
        let target = KanbanColumn::try_from(column).map_err(InvalidTransition::from)?;
        self.move_item(store, id, target)
    }

    /// Sets a work item's status from an explicit control.
    ///
    /// This is the only path to [`Status::Canceled`]. The Kanban column is
    /// recomputed with the forward mapping.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the item is absent.
    pub fn set_status_explicit(
        &self,
        store: &mut ItemStore,
        id: &WorkItemId,
        status: Status,
    ) -> BoardServiceResult<TransitionOutcome> {
        self.apply_work_item_status(store, id, status)
    }

    /// Sets a sub-item's status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::InvalidTransition`] for
    /// [`Status::Canceled`], or [`BoardServiceError::NotFound`] when the
    /// parent or sub-item is absent.
    pub fn set_sub_item_status(
        &self,
        store: &mut ItemStore,
        parent: &WorkItemId,
        id: &SubItemId,
        status: Status,
    ) -> BoardServiceResult<TransitionOutcome> {
        let target = SubItemStatus::try_from(status)?;
        let key = ItemKey::sub_item(parent.clone(), id.clone());
        let sub_item = store
            .get_mut(parent)
            .and_then(|item| item.sub_item_mut(id))
            .ok_or_else(|| not_found(key.clone()))?;

        if sub_item.status() == target {
            tracing::debug!(item = %key, status = %target, "sub-item already in target status");
            return Ok(TransitionOutcome::Unchanged);
        }

        let from = sub_item.apply_status(target, &*self.clock);
        Ok(self.emit(key, from.into(), target.into()))
    }

    fn apply_work_item_status(
        &self,
        store: &mut ItemStore,
        id: &WorkItemId,
        status: Status,
    ) -> BoardServiceResult<TransitionOutcome> {
        let key = ItemKey::work_item(id.clone());
        let item = store
            .get_mut(id)
            .ok_or_else(|| not_found(key.clone()))?;

        if item.status() == status {
            tracing::debug!(item = %key, %status, "work item already in target status");
            return Ok(TransitionOutcome::Unchanged);
        }

        let from = item.apply_status(status, &*self.clock);
        Ok(self.emit(key, from, status))
    }

    fn emit(&self, item: ItemKey, from: Status, to: Status) -> TransitionOutcome {
        let event = TransitionEvent {
            item,
            from,
            to,
            occurred_at: self.clock.utc(),
        };
        tracing::debug!(item = %event.item, %from, %to, "status transition applied");
        self.listener.on_transition(&event);
        TransitionOutcome::Applied(event)
    }
}

fn not_found(key: ItemKey) -> BoardServiceError {
    tracing::warn!(item = %key, "transition target not found in store");
    BoardServiceError::NotFound(key)
}
