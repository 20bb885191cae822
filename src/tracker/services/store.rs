//! In-memory item store.
//!
//! The store is the single source of truth for status and assignment during
//! a view session. It is an explicit value passed to the services that use
//! it; tests build their own instance.

use crate::tracker::domain::{
    BoardDomainError, ItemKey, KanbanColumn, ProjectId, Scope, SubItem, SubItemId, SubItemPatch,
    WorkItem, WorkItemId,
};
use mockable::Clock;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Errors returned by store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemStoreError {
    /// The referenced item is not in the store.
    #[error("{0} not found")]
    NotFound(ItemKey),

    /// A patch failed validation; nothing was written.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The shared store lock was poisoned.
    #[error("item store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type ItemStoreResult<T> = Result<T, ItemStoreError>;

/// What [`ItemStore::upsert`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The item was appended.
    Inserted,
    /// An item with the same id was replaced in place.
    Replaced,
}

/// Ordered collection of work items.
///
/// Insertion order is preserved. Replacing an item keeps its position;
/// nothing is reordered implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<WorkItem>,
}

impl ItemStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a store from items in order. Later duplicates replace
    /// earlier ones in place.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = WorkItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.upsert(item);
        }
        store
    }

    /// Returns every item in insertion order.
    #[must_use]
    pub fn get_all(&self) -> &[WorkItem] {
        &self.items
    }

    /// Returns the number of work items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the store holds no work items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether a work item with this id is present.
    #[must_use]
    pub fn contains(&self, id: &WorkItemId) -> bool {
        self.position(id).is_some()
    }

    /// Looks up a work item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::NotFound`] when the id is absent.
    pub fn get_by_id(&self, id: &WorkItemId) -> ItemStoreResult<&WorkItem> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| not_found(ItemKey::work_item(id.clone())))
    }

    /// Looks up a sub-item under its owning work item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::NotFound`] when either the parent or the
    /// sub-item is absent.
    pub fn get_sub_item(&self, parent: &WorkItemId, id: &SubItemId) -> ItemStoreResult<&SubItem> {
        self.get_by_id(parent)?
            .sub_item(id)
            .ok_or_else(|| not_found(ItemKey::sub_item(parent.clone(), id.clone())))
    }

    /// Inserts a work item, or replaces the item with the same id in place.
    ///
    /// A cached Kanban column that disagrees with the status is discarded
    /// in favour of the status.
    pub fn upsert(&mut self, item: WorkItem) -> UpsertOutcome {
        let healed = heal_cached_column(item);
        match self.position(healed.id()) {
            Some(index) => {
                if let Some(slot) = self.items.get_mut(index) {
                    *slot = healed;
                }
                UpsertOutcome::Replaced
            }
            None => {
                self.items.push(healed);
                UpsertOutcome::Inserted
            }
        }
    }

    /// Removes a work item and its sub-items.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::NotFound`] when the id is absent; the store
    /// is unchanged.
    pub fn remove(&mut self, id: &WorkItemId) -> ItemStoreResult<WorkItem> {
        let index = self
            .position(id)
            .ok_or_else(|| not_found(ItemKey::work_item(id.clone())))?;
        Ok(self.items.remove(index))
    }

    /// Applies a partial update to a sub-item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::NotFound`] when the parent or sub-item is
    /// absent, or [`ItemStoreError::Domain`] when the patch is invalid. In
    /// both cases nothing is written.
    pub fn update_sub_item(
        &mut self,
        parent: &WorkItemId,
        id: &SubItemId,
        patch: SubItemPatch,
        clock: &impl Clock,
    ) -> ItemStoreResult<&SubItem> {
        let key = ItemKey::sub_item(parent.clone(), id.clone());
        let sub_item = self
            .get_mut(parent)
            .and_then(|item| item.sub_item_mut(id))
            .ok_or_else(|| not_found(key))?;
        sub_item.apply_patch(patch, clock)?;
        Ok(sub_item)
    }

    /// Inserts a sub-item under the work item named by its back-reference,
    /// or replaces the sub-item with the same id in place.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::NotFound`] when the parent is absent.
    pub fn insert_sub_item(&mut self, sub_item: SubItem) -> ItemStoreResult<UpsertOutcome> {
        let parent = sub_item.parent().clone();
        let item = self
            .get_mut(&parent)
            .ok_or_else(|| not_found(ItemKey::work_item(parent)))?;
        if item.upsert_sub_item(sub_item) {
            Ok(UpsertOutcome::Replaced)
        } else {
            Ok(UpsertOutcome::Inserted)
        }
    }

    /// Reconciles the store with a fetch result for `scope`.
    ///
    /// Items inside the scope that the fetch no longer returns are removed.
    /// Returned items are upserted in response order; items outside the
    /// scope are untouched.
    pub fn reconcile(&mut self, scope: &Scope<ProjectId>, fetched: Vec<WorkItem>) {
        self.items.retain(|existing| {
            !scope.matches(existing.project_id())
                || fetched.iter().any(|item| item.id() == existing.id())
        });
        for item in fetched {
            self.upsert(item);
        }
    }

    /// Counts work items per Kanban lane, in display order.
    #[must_use]
    pub fn counts_by_column(&self) -> [(KanbanColumn, usize); 3] {
        KanbanColumn::ALL.map(|column| {
            let count = self
                .items
                .iter()
                .filter(|item| item.kanban_column() == column)
                .count();
            (column, count)
        })
    }

    pub(crate) fn get_mut(&mut self, id: &WorkItemId) -> Option<&mut WorkItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn position(&self, id: &WorkItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

fn heal_cached_column(item: WorkItem) -> WorkItem {
    if !item.has_stale_column() {
        return item;
    }
    tracing::debug!(
        item = %item.id(),
        status = %item.status(),
        "discarding stale cached kanban column"
    );
    let status = item.status();
    item.with_status(status)
}

fn not_found(key: ItemKey) -> ItemStoreError {
    tracing::warn!(item = %key, "item not found in store");
    ItemStoreError::NotFound(key)
}

/// Cloneable handle to a store shared across async tasks.
///
/// Access goes through closures so that no lock is ever held across an
/// `.await`.
#[derive(Debug, Clone, Default)]
pub struct SharedItemStore {
    inner: Arc<RwLock<ItemStore>>,
}

impl SharedItemStore {
    /// Wraps a store.
    #[must_use]
    pub fn new(store: ItemStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs `f` with shared access.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Unavailable`] when the lock is poisoned.
    pub fn read<T>(&self, f: impl FnOnce(&ItemStore) -> T) -> ItemStoreResult<T> {
        let guard = self
            .inner
            .read()
            .map_err(|err| ItemStoreError::Unavailable(err.to_string()))?;
        Ok(f(&guard))
    }

    /// Runs `f` with exclusive access.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Unavailable`] when the lock is poisoned.
    pub fn write<T>(&self, f: impl FnOnce(&mut ItemStore) -> T) -> ItemStoreResult<T> {
        let mut guard = self
            .inner
            .write()
            .map_err(|err| ItemStoreError::Unavailable(err.to_string()))?;
        Ok(f(&mut guard))
    }

    /// Returns a copy of the current store contents.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Unavailable`] when the lock is poisoned.
    pub fn snapshot(&self) -> ItemStoreResult<ItemStore> {
        self.read(ItemStore::clone)
    }
}
