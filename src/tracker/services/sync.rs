//! Task API round-trips reconciled into the shared store.

use super::{
    BoardServiceError, BoardServiceResult, ItemStore, ItemStoreResult, SharedItemStore,
    in_flight::{InFlightGuard, InFlightRegistry},
};
use crate::{
    config::BoardConfig,
    tracker::{
        domain::{
            ItemKey, KanbanColumn, ProjectId, Scope, Status, SubItem, SubItemId, SubItemPatch,
            WorkItem, WorkItemId, column_to_status,
        },
        ports::{CollaboratorError, NewSubItem, NewWorkItem, TaskApi, TaskApiResult},
    },
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Sends mutations to the task API and writes each response back into the
/// store by id.
///
/// The store is only written after a successful response, so a failed or
/// timed-out call leaves it exactly as it was. Calls are never retried.
#[derive(Clone)]
pub struct ItemSyncService<A>
where
    A: TaskApi,
{
    api: Arc<A>,
    store: SharedItemStore,
    in_flight: Arc<InFlightRegistry>,
    timeout: Duration,
}

impl<A> ItemSyncService<A>
where
    A: TaskApi,
{
    /// Creates a service writing into `store`.
    #[must_use]
    pub fn new(api: Arc<A>, store: SharedItemStore, config: &BoardConfig) -> Self {
        Self {
            api,
            store,
            in_flight: Arc::new(InFlightRegistry::new(config.busy_policy)),
            timeout: config.collaborator_timeout(),
        }
    }

    /// Returns the store this service writes into.
    #[must_use]
    pub const fn store(&self) -> &SharedItemStore {
        &self.store
    }

    /// Fetches the items for `scope` and reconciles the store with them.
    ///
    /// Returns the number of items fetched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Collaborator`] when the fetch fails.
    pub async fn refresh(&self, scope: &Scope<ProjectId>) -> BoardServiceResult<usize> {
        let fetched = self.call("fetch_items", self.api.fetch_items(scope)).await?;
        let count = fetched.len();
        self.store.write(|store| store.reconcile(scope, fetched))?;
        tracing::info!(?scope, count, "store refreshed from task API");
        Ok(count)
    }

    /// Creates a work item and appends the response to the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Collaborator`] when the call fails.
    pub async fn create_item(&self, payload: NewWorkItem) -> BoardServiceResult<WorkItem> {
        let created = self.call("create_item", self.api.create_item(payload)).await?;
        self.store.write(|store| store.upsert(created.clone()))?;
        tracing::info!(item = %created.id(), "work item created");
        Ok(created)
    }

    /// Sets a work item's status remotely, then reconciles the response.
    ///
    /// The Kanban column is recomputed from the returned status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the item is not in the
    /// store, [`BoardServiceError::ItemBusy`] when another mutation of it is
    /// pending, or [`BoardServiceError::Collaborator`] when the call fails.
    pub async fn update_item_status(
        &self,
        id: &WorkItemId,
        status: Status,
    ) -> BoardServiceResult<WorkItem> {
        let key = ItemKey::work_item(id.clone());
        let _claim = self
            .claim(&key, |store| store.get_by_id(id).map(|_| ()))
            .await?;

        let updated = self
            .call("update_item_status", self.api.update_item_status(id, status))
            .await?;
        let returned = updated.status();
        let reconciled = updated.with_status(returned);
        self.store.write(|store| store.upsert(reconciled.clone()))?;
        tracing::info!(item = %key, %status, "work item status updated");
        Ok(reconciled)
    }

    /// Remote counterpart of a drop: moves a work item to `column`.
    ///
    /// When the item's status already maps back from `column`, no request
    /// is sent and the stored item is returned.
    ///
    /// # Errors
    ///
    /// As for [`Self::update_item_status`].
    pub async fn move_item(
        &self,
        id: &WorkItemId,
        column: KanbanColumn,
    ) -> BoardServiceResult<WorkItem> {
        let target = column_to_status(column);
        let current = self
            .store
            .read(|store| store.get_by_id(id).cloned())??;
        if current.status() == target {
            return Ok(current);
        }
        self.update_item_status(id, target).await
    }

    /// Creates a sub-item remotely and appends it to its parent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the parent is not in the
    /// store, [`BoardServiceError::ItemBusy`] when the parent has a pending
    /// mutation, or [`BoardServiceError::Collaborator`] when the call fails.
    pub async fn create_sub_item(
        &self,
        parent: &WorkItemId,
        payload: NewSubItem,
    ) -> BoardServiceResult<SubItem> {
        let key = ItemKey::work_item(parent.clone());
        let _claim = self
            .claim(&key, |store| store.get_by_id(parent).map(|_| ()))
            .await?;

        let created = self
            .call("create_sub_item", self.api.create_sub_item(parent, payload))
            .await?;
        self.reconcile_sub_item(&created)?;
        tracing::info!(item = %key, sub_item = %created.id(), "sub-item created");
        Ok(created)
    }

    /// Applies a sub-item patch remotely, then reconciles the response.
    ///
    /// The claim is held on the parent work item, the same slot every other
    /// mutation of that item uses.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the sub-item is not in
    /// the store, [`BoardServiceError::ItemBusy`] when its parent has a
    /// pending mutation, or [`BoardServiceError::Collaborator`] when the call
    /// fails.
    pub async fn update_sub_item(
        &self,
        parent: &WorkItemId,
        id: &SubItemId,
        patch: SubItemPatch,
    ) -> BoardServiceResult<SubItem> {
        let key = ItemKey::sub_item(parent.clone(), id.clone());
        let owner = ItemKey::work_item(key.root().clone());
        let _claim = self
            .claim(&owner, |store| store.get_sub_item(parent, id).map(|_| ()))
            .await?;

        let updated = self
            .call("update_sub_item", self.api.update_sub_item(id, patch))
            .await?;
        self.reconcile_sub_item(&updated)?;
        tracing::info!(item = %key, "sub-item updated");
        Ok(updated)
    }

    /// Deletes a work item remotely, then removes it from the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when the item is not in the
    /// store, [`BoardServiceError::ItemBusy`] when it has a pending
    /// mutation, or [`BoardServiceError::Collaborator`] when the call fails.
    pub async fn delete_item(&self, id: &WorkItemId) -> BoardServiceResult<()> {
        let key = ItemKey::work_item(id.clone());
        let claim = self
            .claim(&key, |store| store.get_by_id(id).map(|_| ()))
            .await?;

        self.call("delete_item", self.api.delete_item(id)).await?;
        let removed = self.store.write(|store| store.remove(id))?;
        if removed.is_err() {
            tracing::debug!(item = %key, "deleted item was already gone from the store");
        }
        drop(claim);
        self.in_flight.forget(&key);
        tracing::info!(item = %key, "work item deleted");
        Ok(())
    }

    async fn call<T>(
        &self,
        operation: &'static str,
        request: impl Future<Output = TaskApiResult<T>>,
    ) -> BoardServiceResult<T> {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                tracing::warn!(operation, error = %err, "task API call failed");
                Err(err.into())
            }
            Err(_) => {
                tracing::warn!(operation, timeout = ?self.timeout, "task API call timed out");
                Err(CollaboratorError::TimedOut(self.timeout).into())
            }
        }
    }

    /// Claims `key` while `present` holds. `present` is checked before and
    /// after waiting, so a request queued behind a delete is never sent.
    async fn claim(
        &self,
        key: &ItemKey,
        present: impl Fn(&ItemStore) -> ItemStoreResult<()> + Copy,
    ) -> BoardServiceResult<InFlightGuard> {
        self.store.read(present)??;
        let claim = self.in_flight.acquire(key).await?;
        match self.store.read(present)? {
            Ok(()) => Ok(claim),
            Err(err) => {
                drop(claim);
                self.in_flight.forget(key);
                tracing::debug!(item = %key, "item left the store while queued");
                Err(err.into())
            }
        }
    }

    fn reconcile_sub_item(&self, sub_item: &SubItem) -> BoardServiceResult<()> {
        let written = self
            .store
            .write(|store| store.insert_sub_item(sub_item.clone()))?;
        if let Err(err) = written {
            tracing::warn!(
                sub_item = %sub_item.id(),
                error = %err,
                "task API returned a sub-item whose parent is no longer in the store"
            );
        }
        Ok(())
    }
}
