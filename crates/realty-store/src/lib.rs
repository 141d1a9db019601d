//! Realty document store
//!
//! The persisted state of the whole service is one JSON document with a
//! fixed set of top-level collections. This crate owns that shape and
//! the accessor used to read and rewrite it:
//!
//! - [`Document`]: the single root aggregate, one ordered [`Record`]
//!   sequence per [`Collection`]
//! - [`Record`]: a schema-free JSON object carrying a unique `id`
//! - [`DocumentStore`]: the load/save seam injected into the engine
//! - [`JsonFileStore`]: file-backed store, full read on every load and
//!   full atomic rewrite on every save
//! - [`MemoryStore`]: in-process store for tests
//!
//! No store caches anything between calls; every operation elsewhere in
//! the service is a complete load-modify-save cycle against one of
//! these stores.

#![warn(unreachable_pub)]

mod document;
mod error;
mod record;
mod store;

pub use document::{Collection, Document};
pub use error::StoreError;
pub use record::{Record, ID_FIELD};
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
