//! Per-item guard against overlapping task API mutations.

use super::{BoardServiceError, BoardServiceResult};
use crate::{config::BusyPolicy, tracker::domain::ItemKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Tracks which items have a mutation waiting on the task API.
#[derive(Debug)]
pub(crate) struct InFlightRegistry {
    policy: BusyPolicy,
    slots: Mutex<HashMap<ItemKey, Arc<AsyncMutex<()>>>>,
}

/// Held for the duration of one task API mutation.
pub(crate) type InFlightGuard = OwnedMutexGuard<()>;

impl InFlightRegistry {
    pub(crate) fn new(policy: BusyPolicy) -> Self {
        Self {
            policy,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Claims the item. Under [`BusyPolicy::Reject`] a held claim fails
    /// immediately; under [`BusyPolicy::Queue`] the caller waits its turn.
    pub(crate) async fn acquire(&self, key: &ItemKey) -> BoardServiceResult<InFlightGuard> {
        let slot = self.slot(key)?;
        match self.policy {
            BusyPolicy::Reject => slot.try_lock_owned().map_err(|_| {
                tracing::debug!(item = %key, "rejecting overlapping mutation");
                BoardServiceError::ItemBusy(key.clone())
            }),
            BusyPolicy::Queue => Ok(slot.lock_owned().await),
        }
    }

    /// Drops the slot for an item that no longer exists. A slot that a
    /// queued caller still holds is kept, so later claims keep waiting on
    /// the same mutex.
    pub(crate) fn forget(&self, key: &ItemKey) {
        let Ok(mut slots) = self.slots.lock() else {
            return;
        };
        if slots
            .get(key)
            .is_some_and(|slot| Arc::strong_count(slot) == 1)
        {
            slots.remove(key);
        }
    }

    fn slot(&self, key: &ItemKey) -> BoardServiceResult<Arc<AsyncMutex<()>>> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|err| BoardServiceError::StoreUnavailable(err.to_string()))?;
        Ok(Arc::clone(slots.entry(key.clone()).or_default()))
    }
}
