use thiserror::Error;

use world::StoreError;

/// Result alias used by every [`Kit`](crate::Kit) operation.
pub type KitResult<T> = Result<T, KitError>;

/// Errors raised by the orchestrator.
#[derive(Debug, Error)]
pub enum KitError {
    #[error("kit is already loaded on a render surface")]
    AlreadyLoaded,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
