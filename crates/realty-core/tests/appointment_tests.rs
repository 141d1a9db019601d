use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

use realty_core::{Collection, EngineError, Registry};
use realty_store::MemoryStore;

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Registry pre-seeded with one property, one client and one broker;
/// returns their generated ids.
fn seeded() -> (Registry<MemoryStore>, String, String, String) {
    let registry = Registry::new(MemoryStore::default());
    let property = registry
        .engine(Collection::Properties)
        .create(fields(json!({ "name": "Casa Azul" })))
        .unwrap();
    let client = registry
        .engine(Collection::Clients)
        .create(fields(json!({ "name": "Yara" })))
        .unwrap();
    let broker = registry
        .engine(Collection::Brokers)
        .create(fields(json!({ "name": "Zed" })))
        .unwrap();
    let ids = (
        property.id().unwrap().to_string(),
        client.id().unwrap().to_string(),
        broker.id().unwrap().to_string(),
    );
    (registry, ids.0, ids.1, ids.2)
}

#[test]
fn create_succeeds_when_all_references_resolve() {
    let (registry, property_id, client_id, broker_id) = seeded();

    let appointment = registry
        .appointments()
        .create(fields(json!({
            "propertyId": property_id,
            "clientId": client_id,
            "brokerId": broker_id,
            "date": "2024-01-01",
        })))
        .unwrap();

    assert!(appointment.id().is_some());
    assert_eq!(appointment.get("date"), Some(&json!("2024-01-01")));
    assert_eq!(
        registry.engine(Collection::Appointments).list().unwrap(),
        vec![appointment]
    );
}

#[test]
fn create_rejects_each_unresolved_reference() {
    let (registry, property_id, client_id, broker_id) = seeded();
    let validator = registry.appointments();

    let cases = [
        ("propertyId", json!({ "propertyId": "bogus", "clientId": client_id, "brokerId": broker_id })),
        ("clientId", json!({ "propertyId": property_id, "clientId": "bogus", "brokerId": broker_id })),
        ("brokerId", json!({ "propertyId": property_id, "clientId": client_id, "brokerId": "bogus" })),
    ];

    for (field, body) in cases {
        let err = validator.create(fields(body)).unwrap_err();
        match err {
            EngineError::InvalidReference(message) => {
                assert_eq!(message, field);
            }
            other => panic!("expected InvalidReference, got {other:?}"),
        }
    }

    // No record was appended and no identifier generated.
    assert!(registry.engine(Collection::Appointments).list().unwrap().is_empty());
}

#[test]
fn create_rejects_missing_or_non_string_reference_fields() {
    let (registry, property_id, client_id, _broker_id) = seeded();

    let err = registry
        .appointments()
        .create(fields(json!({
            "propertyId": property_id,
            "clientId": client_id,
            "brokerId": 7,
        })))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidReference(ref m) if m == "brokerId"));

    let err = registry
        .appointments()
        .create(fields(json!({ "date": "2024-01-01" })))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidReference(ref m) if m == "propertyId, clientId, brokerId"
    ));
}

#[test]
fn update_performs_no_reference_validation() {
    let (registry, property_id, client_id, broker_id) = seeded();

    let appointment = registry
        .appointments()
        .create(fields(json!({
            "propertyId": property_id,
            "clientId": client_id,
            "brokerId": broker_id,
        })))
        .unwrap();
    let id = appointment.id().unwrap().to_string();

    // Updates go through the plain engine; dangling ids are accepted.
    let updated = registry
        .engine(Collection::Appointments)
        .update(&id, fields(json!({ "propertyId": "bogus" })))
        .unwrap();
    assert_eq!(updated.get("propertyId"), Some(&json!("bogus")));
}

#[test]
fn references_are_not_rechecked_after_creation() {
    let (registry, property_id, client_id, broker_id) = seeded();

    let appointment = registry
        .appointments()
        .create(fields(json!({
            "propertyId": property_id,
            "clientId": client_id,
            "brokerId": broker_id,
        })))
        .unwrap();

    // Deleting the property leaves the appointment dangling, by design.
    registry.engine(Collection::Properties).delete(&property_id).unwrap();
    let listed = registry.engine(Collection::Appointments).list().unwrap();
    assert_eq!(listed, vec![appointment]);
}
