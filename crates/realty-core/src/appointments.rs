//! Referential-integrity check for appointment creation
//!
//! An appointment references one property, one client and one broker
//! by plain id. The references are resolved exactly once, here, before
//! the record is created; nothing re-checks them afterwards, so a
//! referenced record deleted later leaves a dangling id behind.

use std::sync::Arc;

use serde_json::{Map, Value};

use realty_store::{Collection, DocumentStore, Record};

use crate::engine::CollectionEngine;
use crate::error::EngineError;

/// Foreign-key fields and the collections they must resolve in.
const REFERENCES: [(&str, Collection); 3] = [
    ("propertyId", Collection::Properties),
    ("clientId", Collection::Clients),
    ("brokerId", Collection::Brokers),
];

/// Create-path wrapper for the `appointments` collection.
///
/// Validation reads the document once; the delegated create performs
/// its own load-modify-save cycle under the write lock. Updates to
/// appointments go through the plain engine and are not validated.
#[derive(Debug, Clone)]
pub struct AppointmentValidator<S> {
    store: Arc<S>,
    engine: CollectionEngine<S>,
}

impl<S: DocumentStore> AppointmentValidator<S> {
    pub(crate) fn new(store: Arc<S>, engine: CollectionEngine<S>) -> Self {
        debug_assert_eq!(engine.collection(), Collection::Appointments);
        Self { store, engine }
    }

    /// Validate the three foreign references, then delegate to the
    /// generic create path.
    ///
    /// A foreign-key field that is absent, not a string, or not found
    /// in its collection counts as invalid. On failure nothing is
    /// mutated and no identifier is generated.
    pub fn create(&self, fields: Map<String, Value>) -> Result<Record, EngineError> {
        let doc = self.store.load()?;

        let mut invalid = Vec::new();
        for (field, collection) in REFERENCES {
            let resolved = fields
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|id| doc.contains(collection, id));
            if !resolved {
                invalid.push(field);
            }
        }
        if !invalid.is_empty() {
            tracing::warn!("rejected appointment: invalid {}", invalid.join(", "));
            return Err(EngineError::InvalidReference(invalid.join(", ")));
        }

        self.engine.create(fields)
    }
}
