//! Service-level error taxonomy.

use crate::tracker::{
    domain::{BoardDomainError, InvalidTransition, ItemKey},
    ports::CollaboratorError,
};
use thiserror::Error;

use super::ItemStoreError;

/// Errors returned by tracker services.
///
/// None of these are fatal. On every error the store is left as it was
/// before the call, so the caller can re-present the unchanged state.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The operation referenced an item absent from the store.
    #[error("{0} not found")]
    NotFound(ItemKey),

    /// The state machine rejected the change before the store was touched.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The task API failed or timed out.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// Another mutation of the same item is still waiting on the task API.
    #[error("{0} already has a request in flight")]
    ItemBusy(ItemKey),

    /// The shared store lock was poisoned.
    #[error("item store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<ItemStoreError> for BoardServiceError {
    fn from(err: ItemStoreError) -> Self {
        match err {
            ItemStoreError::NotFound(key) => Self::NotFound(key),
            ItemStoreError::Domain(domain) => Self::Domain(domain),
            ItemStoreError::Unavailable(reason) => Self::StoreUnavailable(reason),
        }
    }
}

/// Result type for tracker services.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;
