//! The root document and its fixed collection set

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The collections the service knows about, fixed at deployment time.
///
/// The engine is instantiated once per variant; there is no dynamic
/// collection lookup anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Listed properties.
    Properties,
    /// Brokers handling viewings.
    Brokers,
    /// Prospective clients.
    Clients,
    /// Viewing appointments, referencing the other three collections.
    Appointments,
}

impl Collection {
    /// Every known collection, in persisted order.
    pub const ALL: [Collection; 4] = [
        Collection::Properties,
        Collection::Brokers,
        Collection::Clients,
        Collection::Appointments,
    ];

    /// The collection's name as it appears in the document and in URLs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Collection::Properties => "properties",
            Collection::Brokers => "brokers",
            Collection::Clients => "clients",
            Collection::Appointments => "appointments",
        }
    }

    /// Resolve a name back to a collection.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Collection::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single root aggregate persisted as one JSON document.
///
/// All four keys are mandatory. None of the fields carries a serde
/// default, so a persisted document missing a collection fails to
/// deserialize and surfaces as
/// [`StoreError::Corrupt`](crate::StoreError::Corrupt).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The `properties` collection.
    pub properties: Vec<Record>,
    /// The `brokers` collection.
    pub brokers: Vec<Record>,
    /// The `clients` collection.
    pub clients: Vec<Record>,
    /// The `appointments` collection.
    pub appointments: Vec<Record>,
}

impl Document {
    /// Borrow one collection's records, in persisted order.
    #[must_use]
    pub fn collection(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Properties => &self.properties,
            Collection::Brokers => &self.brokers,
            Collection::Clients => &self.clients,
            Collection::Appointments => &self.appointments,
        }
    }

    /// Mutably borrow one collection's records.
    pub fn collection_mut(&mut self, collection: Collection) -> &mut Vec<Record> {
        match collection {
            Collection::Properties => &mut self.properties,
            Collection::Brokers => &mut self.brokers,
            Collection::Clients => &mut self.clients,
            Collection::Appointments => &mut self.appointments,
        }
    }

    /// Whether `collection` holds a record with the given id.
    #[must_use]
    pub fn contains(&self, collection: Collection, id: &str) -> bool {
        self.collection(collection)
            .iter()
            .any(|record| record.id() == Some(id))
    }
}
