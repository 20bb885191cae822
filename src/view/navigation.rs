//! Drill-down navigation between work item and sub-item detail views.
//!
//! The stack holds one frame per level. The top frame is the focused item;
//! the frames below it form the return stack that `close` unwinds.

use crate::tracker::{
    domain::{InvalidTransition, ItemKey, SubItem, SubItemId, WorkItem, WorkItemId},
    services::ItemStore,
};
use thiserror::Error;

/// Errors raised by navigation requests. The stack is unchanged when one is
/// returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested item is not in the store.
    #[error("{0} not found")]
    NotFound(ItemKey),

    /// The request is not legal from the current state.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}

/// Result type for navigation requests.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Borrowed view of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState<'a> {
    /// No detail view is open.
    Closed,
    /// One item is focused.
    Focused {
        /// Focused item.
        item: &'a ItemKey,
        /// Frames to restore on close, outermost first.
        return_stack: &'a [ItemKey],
    },
}

/// Store entry behind a navigation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedItem<'a> {
    /// A work item detail view.
    WorkItem(&'a WorkItem),
    /// A sub-item detail view.
    SubItem(&'a SubItem),
}

/// Stack of focused items, from the opened work item down to the current
/// drill-down target.
///
/// After `n` drills, `n + 1` calls to [`Self::close`] always reach the closed
/// state, and further calls are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    frames: Vec<ItemKey>,
}

impl NavigationStack {
    /// Creates a closed stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> NavigationState<'_> {
        match self.frames.split_last() {
            None => NavigationState::Closed,
            Some((item, return_stack)) => NavigationState::Focused { item, return_stack },
        }
    }

    /// Returns the focused item, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&ItemKey> {
        self.frames.last()
    }

    /// Returns the frames `close` would restore, outermost first.
    #[must_use]
    pub fn return_stack(&self) -> &[ItemKey] {
        match self.state() {
            NavigationState::Closed => &[],
            NavigationState::Focused { return_stack, .. } => return_stack,
        }
    }

    /// Returns the number of frames, zero when closed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns whether no item is focused.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.frames.is_empty()
    }

    /// Focuses a work item with an empty return stack.
    ///
    /// Opening while already focused discards the previous frames.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotFound`] when the item is not in `store`.
    pub fn open(&mut self, store: &ItemStore, id: &WorkItemId) -> NavigationResult<()> {
        let key = ItemKey::work_item(id.clone());
        if !store.contains(id) {
            tracing::warn!(item = %key, "cannot open missing item");
            return Err(NavigationError::NotFound(key));
        }
        if !self.frames.is_empty() {
            tracing::debug!(discarded = self.frames.len(), "replacing open navigation frames");
        }
        self.frames.clear();
        self.push(key);
        Ok(())
    }

    /// Focuses a sub-item of the focused work item, pushing the work item
    /// onto the return stack.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition::NothingFocused`] when closed,
    /// [`InvalidTransition::NotAWorkItem`] when a sub-item is focused,
    /// [`InvalidTransition::NotAChild`] when the focused work item does not
    /// own `sub_item`, or [`NavigationError::NotFound`] when the focused work
    /// item has left the store.
    pub fn drill_into(
        &mut self,
        store: &ItemStore,
        sub_item: &SubItemId,
    ) -> NavigationResult<()> {
        let parent = match self.frames.last() {
            None => return Err(InvalidTransition::NothingFocused.into()),
            Some(ItemKey::SubItem { id, .. }) => {
                return Err(InvalidTransition::NotAWorkItem(id.clone()).into());
            }
            Some(ItemKey::WorkItem { id }) => id.clone(),
        };

        let owner = store
            .get_by_id(&parent)
            .map_err(|_| NavigationError::NotFound(ItemKey::work_item(parent.clone())))?;
        if !owner.has_sub_item(sub_item) {
            return Err(InvalidTransition::NotAChild {
                parent,
                sub_item: sub_item.clone(),
            }
            .into());
        }

        self.push(ItemKey::sub_item(parent, sub_item.clone()));
        Ok(())
    }

    /// Unfocuses the current item and restores the frame below it.
    ///
    /// Returns the newly focused item, or `None` when the stack is now
    /// closed. Closing an already closed stack does nothing.
    pub fn close(&mut self) -> Option<&ItemKey> {
        if let Some(closed) = self.frames.pop() {
            tracing::debug!(item = %closed, depth = self.frames.len(), "navigation frame closed");
        }
        self.frames.last()
    }

    /// Closes every frame.
    pub fn close_all(&mut self) {
        self.frames.clear();
    }

    /// Looks up the focused item in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition::NothingFocused`] when closed, or
    /// [`NavigationError::NotFound`] when the focused item has left the
    /// store.
    pub fn resolve<'a>(&self, store: &'a ItemStore) -> NavigationResult<FocusedItem<'a>> {
        let key = self
            .frames
            .last()
            .ok_or(InvalidTransition::NothingFocused)?;
        let missing = |_| NavigationError::NotFound(key.clone());
        match key {
            ItemKey::WorkItem { id } => store
                .get_by_id(id)
                .map(FocusedItem::WorkItem)
                .map_err(missing),
            ItemKey::SubItem { parent, id } => store
                .get_sub_item(parent, id)
                .map(FocusedItem::SubItem)
                .map_err(missing),
        }
    }

    fn push(&mut self, key: ItemKey) {
        tracing::debug!(item = %key, depth = self.frames.len() + 1, "navigation frame opened");
        self.frames.push(key);
    }
}
