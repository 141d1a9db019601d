//! Realty collection engine
//!
//! Turns a collection name into a full CRUD surface over the persisted
//! document, plus the referential-integrity check appointments go
//! through before creation.
//!
//! # Core Concepts
//!
//! - [`Registry`]: owns the injected store and the single write lock,
//!   hands out engines at startup
//! - [`CollectionEngine`]: list/get/create/update/delete over one
//!   collection, each operation a full load-modify-save cycle
//! - [`AppointmentValidator`]: checks `propertyId`, `clientId` and
//!   `brokerId` against their collections before delegating to the
//!   generic create path
//!
//! Mutations are serialized behind one mutex for the whole
//! load-modify-save cycle, so two writers cannot silently discard each
//! other's updates. Reads take no lock.

#![warn(unreachable_pub)]

mod appointments;
mod engine;
mod error;
mod registry;

pub use appointments::AppointmentValidator;
pub use engine::CollectionEngine;
pub use error::EngineError;
pub use registry::Registry;

pub use realty_store::{Collection, Document, DocumentStore, Record, StoreError};
