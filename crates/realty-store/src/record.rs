//! Schema-free records
//!
//! A record is a plain JSON object. The only field the engine ever
//! interprets is `id`; everything else passes through untouched so the
//! on-disk layout stays compatible with previously persisted state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding a record's unique identifier.
pub const ID_FIELD: &str = "id";

/// A single record inside a collection.
///
/// Transparent wrapper over a JSON object; serializes exactly as the
/// underlying map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap caller-supplied fields as a record.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record's identifier, if present and a string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Read a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field, overwriting any existing value.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    /// Shallow merge: every field in `partial` overwrites the
    /// same-named field here; all other fields are retained. The `id`
    /// field is never altered, even if present in `partial`.
    pub fn merge(&mut self, partial: Map<String, Value>) {
        for (field, value) in partial {
            if field == ID_FIELD {
                continue;
            }
            self.0.insert(field, value);
        }
    }

    /// Borrow the underlying field map.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn id_requires_string_value() {
        let record = Record::new(fields(json!({ "id": 42 })));
        assert_eq!(record.id(), None);

        let record = Record::new(fields(json!({ "id": "r-1" })));
        assert_eq!(record.id(), Some("r-1"));
    }

    #[test]
    fn merge_overwrites_and_retains() {
        let mut record = Record::new(fields(json!({
            "id": "r-1",
            "name": "old",
            "rooms": 3,
        })));
        record.merge(fields(json!({ "name": "new", "garage": true })));

        assert_eq!(record.get("name"), Some(&json!("new")));
        assert_eq!(record.get("rooms"), Some(&json!(3)));
        assert_eq!(record.get("garage"), Some(&json!(true)));
    }

    #[test]
    fn merge_never_touches_id() {
        let mut record = Record::new(fields(json!({ "id": "r-1" })));
        record.merge(fields(json!({ "id": "forged", "name": "x" })));
        assert_eq!(record.id(), Some("r-1"));
    }

    #[test]
    fn serializes_transparently() {
        let record = Record::new(fields(json!({ "id": "r-1", "name": "x" })));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({ "id": "r-1", "name": "x" }));
    }
}
