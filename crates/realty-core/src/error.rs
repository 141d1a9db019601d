//! Engine error taxonomy
//!
//! Only three outcomes exist: the requested id is missing, an
//! appointment referenced ids that do not resolve, or the store itself
//! failed. Delete never produces `NotFound` (it is idempotent); Get and
//! Update do.

use realty_store::StoreError;

/// Errors surfaced by collection operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Requested id absent from the target collection.
    #[error("not found")]
    NotFound,

    /// One or more foreign ids did not resolve during appointment
    /// creation. The message names the offending fields.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// Persistence failure, fatal to the request.
    #[error(transparent)]
    Store(#[from] StoreError),
}
