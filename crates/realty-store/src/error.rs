//! Store error taxonomy

/// Errors raised by a [`DocumentStore`](crate::DocumentStore).
///
/// Both variants are fatal to the request that triggered them; there is
/// no retry or recovery path in the store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The persistence medium is missing, unreadable or unwritable.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] std::io::Error),

    /// The persisted bytes do not parse into the expected document
    /// shape. A missing collection key lands here: the shape is fixed
    /// at deployment time, so absence is corruption, not an empty
    /// collection.
    #[error("corrupt persisted state: {0}")]
    Corrupt(#[from] serde_json::Error),
}
