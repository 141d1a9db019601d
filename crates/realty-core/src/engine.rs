//! Generic per-collection CRUD engine

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use uuid::Uuid;

use realty_store::{Collection, DocumentStore, Record, ID_FIELD};

use crate::error::EngineError;

/// Field stamped on newly created properties.
const CREATED_AT_FIELD: &str = "createdAt";

/// CRUD surface over one named collection.
///
/// Every operation loads the full persisted document, transforms the
/// targeted collection, and (for mutations) writes the full document
/// back before returning. Mutations hold the registry-wide write lock
/// across the whole cycle so concurrent read-modify-write cycles
/// cannot interleave.
#[derive(Debug)]
pub struct CollectionEngine<S> {
    store: Arc<S>,
    write_lock: Arc<Mutex<()>>,
    collection: Collection,
}

impl<S> Clone for CollectionEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            write_lock: Arc::clone(&self.write_lock),
            collection: self.collection,
        }
    }
}

impl<S: DocumentStore> CollectionEngine<S> {
    pub(crate) fn new(store: Arc<S>, write_lock: Arc<Mutex<()>>, collection: Collection) -> Self {
        Self {
            store,
            write_lock,
            collection,
        }
    }

    /// The collection this engine operates on.
    #[must_use]
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// All records, in persisted order.
    pub fn list(&self) -> Result<Vec<Record>, EngineError> {
        let doc = self.store.load()?;
        Ok(doc.collection(self.collection).to_vec())
    }

    /// First record whose id matches, or [`EngineError::NotFound`].
    pub fn get(&self, id: &str) -> Result<Record, EngineError> {
        let doc = self.store.load()?;
        doc.collection(self.collection)
            .iter()
            .find(|record| record.id() == Some(id))
            .cloned()
            .ok_or(EngineError::NotFound)
    }

    /// Append a new record built from `fields` and a fresh identifier.
    ///
    /// The generated id always wins: a caller-supplied `id` field is
    /// overwritten. Properties are additionally stamped with a
    /// server-owned `createdAt`. No uniqueness constraint applies to
    /// any other field.
    pub fn create(&self, fields: Map<String, Value>) -> Result<Record, EngineError> {
        let _guard = self.write_lock.lock();
        let mut doc = self.store.load()?;

        let mut record = Record::new(fields);
        if self.collection == Collection::Properties {
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            record.set(CREATED_AT_FIELD, Value::String(now));
        }
        let id = Uuid::new_v4().to_string();
        record.set(ID_FIELD, Value::String(id.clone()));

        doc.collection_mut(self.collection).push(record.clone());
        self.store.save(&doc)?;

        tracing::info!("created {} record {}", self.collection, id);
        Ok(record)
    }

    /// Shallow-merge `partial` into the record with the given id.
    ///
    /// Fields present in `partial` overwrite their counterparts, all
    /// other fields are retained, and `id` is never altered even if
    /// `partial` carries one. Fails with [`EngineError::NotFound`] if
    /// no record matches.
    pub fn update(&self, id: &str, partial: Map<String, Value>) -> Result<Record, EngineError> {
        let _guard = self.write_lock.lock();
        let mut doc = self.store.load()?;

        let record = doc
            .collection_mut(self.collection)
            .iter_mut()
            .find(|record| record.id() == Some(id))
            .ok_or(EngineError::NotFound)?;
        record.merge(partial);
        let merged = record.clone();

        self.store.save(&doc)?;
        tracing::info!("updated {} record {}", self.collection, id);
        Ok(merged)
    }

    /// Remove every record with the given id.
    ///
    /// Idempotent: a miss still persists the (unchanged) document and
    /// reports success. Delete never reports `NotFound`.
    pub fn delete(&self, id: &str) -> Result<(), EngineError> {
        let _guard = self.write_lock.lock();
        let mut doc = self.store.load()?;

        let records = doc.collection_mut(self.collection);
        let before = records.len();
        records.retain(|record| record.id() != Some(id));
        let removed = before - records.len();

        self.store.save(&doc)?;
        tracing::info!(
            "delete {} record {} (removed {})",
            self.collection,
            id,
            removed
        );
        Ok(())
    }
}
