//! Engine registry
//!
//! One registry per process. It owns the injected store and the single
//! write lock shared by every engine, so all mutations in the process
//! serialize through the same point.

use std::sync::Arc;

use parking_lot::Mutex;

use realty_store::{Collection, DocumentStore};

use crate::appointments::AppointmentValidator;
use crate::engine::CollectionEngine;

/// Factory for per-collection engines over one shared store.
#[derive(Debug)]
pub struct Registry<S> {
    store: Arc<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S: DocumentStore> Registry<S> {
    /// Registry over the given store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Engine for one collection. Engines are cheap handles; they share
    /// the registry's store and write lock.
    #[must_use]
    pub fn engine(&self, collection: Collection) -> CollectionEngine<S> {
        CollectionEngine::new(
            Arc::clone(&self.store),
            Arc::clone(&self.write_lock),
            collection,
        )
    }

    /// Validating create-path for the `appointments` collection.
    #[must_use]
    pub fn appointments(&self) -> AppointmentValidator<S> {
        AppointmentValidator::new(
            Arc::clone(&self.store),
            self.engine(Collection::Appointments),
        )
    }
}
