//! In-memory task API for service tests and local deterministic flows.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::tracker::{
    domain::{
        ItemKey, ProjectId, Scope, Status, SubItem, SubItemId, SubItemPatch, WorkItem, WorkItemId,
    },
    ports::{CollaboratorError, NewSubItem, NewWorkItem, TaskApi, TaskApiResult},
};

/// Task API backed by a vector of work items.
///
/// Failures can be queued with [`Self::fail_next`] and every call can be
/// delayed with [`Self::set_latency`] to exercise timeouts.
#[derive(Debug)]
pub struct InMemoryTaskApi<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryApiState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryApiState {
    items: Vec<WorkItem>,
    next_number: u64,
    queued_failures: VecDeque<CollaboratorError>,
    latency: Option<Duration>,
    calls: usize,
}

impl<C> Clone for InMemoryTaskApi<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl InMemoryTaskApi<DefaultClock> {
    /// Creates an empty API using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskApi<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskApi<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty API using `clock` for timestamps.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryApiState {
                next_number: 1,
                ..InMemoryApiState::default()
            })),
            clock,
        }
    }

    /// Replaces the remote items.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn seed(&self, items: impl IntoIterator<Item = WorkItem>) -> TaskApiResult<()> {
        let mut state = self.write_state()?;
        state.items = items.into_iter().collect();
        Ok(())
    }

    /// Returns a copy of the remote items.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn items(&self) -> TaskApiResult<Vec<WorkItem>> {
        Ok(self.read_state()?.items.clone())
    }

    /// Queues an error returned by the next call instead of its result.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_next(&self, error: CollaboratorError) -> TaskApiResult<()> {
        self.write_state()?.queued_failures.push_back(error);
        Ok(())
    }

    /// Delays every subsequent call by `latency`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn set_latency(&self, latency: Duration) -> TaskApiResult<()> {
        self.write_state()?.latency = Some(latency);
        Ok(())
    }

    /// Returns the number of calls received, including failed ones.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn call_count(&self) -> TaskApiResult<usize> {
        Ok(self.read_state()?.calls)
    }

    /// Counts the call, waits out the configured latency, and pops a queued
    /// failure if there is one.
    async fn begin_call(&self) -> TaskApiResult<()> {
        let latency = {
            let mut state = self.write_state()?;
            state.calls += 1;
            state.latency
        };
        if let Some(delay) = latency {
            tokio::time::sleep(delay).await;
        }
        self.write_state()?
            .queued_failures
            .pop_front()
            .map_or(Ok(()), Err)
    }

    fn read_state(&self) -> TaskApiResult<std::sync::RwLockReadGuard<'_, InMemoryApiState>> {
        self.state
            .read()
            .map_err(|err| CollaboratorError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskApiResult<std::sync::RwLockWriteGuard<'_, InMemoryApiState>> {
        self.state
            .write()
            .map_err(|err| CollaboratorError::transport(std::io::Error::other(err.to_string())))
    }
}

fn rejected(err: impl std::fmt::Display) -> CollaboratorError {
    CollaboratorError::Rejected(err.to_string())
}

#[async_trait]
impl<C> TaskApi for InMemoryTaskApi<C>
where
    C: Clock + Send + Sync,
{
    async fn fetch_items(&self, scope: &Scope<ProjectId>) -> TaskApiResult<Vec<WorkItem>> {
        self.begin_call().await?;
        let state = self.read_state()?;
        Ok(state
            .items
            .iter()
            .filter(|item| scope.matches(item.project_id()))
            .cloned()
            .collect())
    }

    async fn create_item(&self, payload: NewWorkItem) -> TaskApiResult<WorkItem> {
        self.begin_call().await?;
        let mut item = WorkItem::new(
            WorkItemId::generate(),
            payload.project_id,
            payload.title,
            &*self.clock,
        )
        .map_err(rejected)?;
        if let Some(description) = payload.description {
            item = item.with_description(description);
        }
        if let Some(priority) = payload.priority {
            item = item.with_priority(priority);
        }
        if let Some(assignee) = payload.assignee {
            item = item.with_assignee(assignee);
        }
        if let Some(opener) = payload.opener {
            item = item.with_opener(opener);
        }

        let mut state = self.write_state()?;
        let created = item.with_number(state.next_number);
        state.next_number += 1;
        state.items.push(created.clone());
        Ok(created)
    }

    async fn update_item_status(
        &self,
        id: &WorkItemId,
        status: Status,
    ) -> TaskApiResult<WorkItem> {
        self.begin_call().await?;
        let mut state = self.write_state()?;
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| CollaboratorError::NotFound(ItemKey::work_item(id.clone())))?;
        item.apply_status(status, &*self.clock);
        Ok(item.clone())
    }

    async fn create_sub_item(
        &self,
        parent: &WorkItemId,
        payload: NewSubItem,
    ) -> TaskApiResult<SubItem> {
        self.begin_call().await?;
        let mut sub_item = SubItem::new(
            SubItemId::generate(),
            parent.clone(),
            payload.title,
            &*self.clock,
        )
        .map_err(rejected)?;
        if let Some(description) = payload.description {
            sub_item = sub_item.with_description(description);
        }
        if let Some(priority) = payload.priority {
            sub_item = sub_item.with_priority(priority);
        }
        if let Some(assignee) = payload.assignee {
            sub_item = sub_item.with_assignee(assignee);
        }

        let mut state = self.write_state()?;
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id() == parent)
            .ok_or_else(|| CollaboratorError::NotFound(ItemKey::work_item(parent.clone())))?;
        item.upsert_sub_item(sub_item.clone());
        Ok(sub_item)
    }

    async fn update_sub_item(
        &self,
        id: &SubItemId,
        patch: SubItemPatch,
    ) -> TaskApiResult<SubItem> {
        self.begin_call().await?;
        let mut state = self.write_state()?;
        let Some(sub_item) = state
            .items
            .iter_mut()
            .find_map(|item| item.sub_item_mut(id))
        else {
            return Err(CollaboratorError::Rejected(format!("unknown sub-item {id}")));
        };
        sub_item.apply_patch(patch, &*self.clock).map_err(rejected)?;
        Ok(sub_item.clone())
    }

    async fn delete_item(&self, id: &WorkItemId) -> TaskApiResult<()> {
        self.begin_call().await?;
        let mut state = self.write_state()?;
        let before = state.items.len();
        state.items.retain(|item| item.id() != id);
        if state.items.len() == before {
            return Err(CollaboratorError::NotFound(ItemKey::work_item(id.clone())));
        }
        Ok(())
    }
}
