//! HTTP transport for the realty API
//!
//! One generic entity router covers all four collections:
//!
//! | Verb   | Path            | Operation                      |
//! |--------|-----------------|--------------------------------|
//! | GET    | `/{entity}`     | List                           |
//! | GET    | `/{entity}/{id}`| Get                            |
//! | POST   | `/{entity}`     | Create (validated appointments)|
//! | PUT    | `/{entity}/{id}`| Update                         |
//! | DELETE | `/{entity}/{id}`| Delete                         |
//!
//! An unknown entity segment is a plain 404, the same body a missing
//! record produces.

#![warn(unreachable_pub)]

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};

use realty_core::{Collection, DocumentStore, EngineError, Record, Registry};

/// Shared handler state: the process-wide engine registry.
pub type AppState<S> = Arc<Registry<S>>;

/// Error body for every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}

/// Body returned by every successful delete.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// Acknowledgment text.
    pub message: String,
}

/// Liveness probe body.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    /// Always `"ok"` when the process is serving.
    pub status: String,
}

type ErrorResponse = (StatusCode, Json<ErrorBody>);

/// Build the full entity router over the given registry.
pub fn router<S: DocumentStore + 'static>(registry: AppState<S>) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/:entity", get(list_records::<S>).post(create_record::<S>))
        .route(
            "/:entity/:id",
            get(get_record::<S>)
                .put(update_record::<S>)
                .delete(delete_record::<S>),
        )
        .with_state(registry)
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
    })
}

async fn list_records<S: DocumentStore>(
    State(registry): State<AppState<S>>,
    Path(entity): Path<String>,
) -> Result<Json<Vec<Record>>, ErrorResponse> {
    let collection = parse_entity(&entity)?;
    let records = registry.engine(collection).list().map_err(error_response)?;
    Ok(Json(records))
}

async fn get_record<S: DocumentStore>(
    State(registry): State<AppState<S>>,
    Path((entity, id)): Path<(String, String)>,
) -> Result<Json<Record>, ErrorResponse> {
    let collection = parse_entity(&entity)?;
    let record = registry
        .engine(collection)
        .get(&id)
        .map_err(error_response)?;
    Ok(Json(record))
}

async fn create_record<S: DocumentStore>(
    State(registry): State<AppState<S>>,
    Path(entity): Path<String>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Record>), ErrorResponse> {
    let collection = parse_entity(&entity)?;
    let record = match collection {
        Collection::Appointments => registry.appointments().create(fields),
        other => registry.engine(other).create(fields),
    }
    .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_record<S: DocumentStore>(
    State(registry): State<AppState<S>>,
    Path((entity, id)): Path<(String, String)>,
    Json(partial): Json<Map<String, Value>>,
) -> Result<Json<Record>, ErrorResponse> {
    let collection = parse_entity(&entity)?;
    let record = registry
        .engine(collection)
        .update(&id, partial)
        .map_err(error_response)?;
    Ok(Json(record))
}

async fn delete_record<S: DocumentStore>(
    State(registry): State<AppState<S>>,
    Path((entity, id)): Path<(String, String)>,
) -> Result<Json<MessageBody>, ErrorResponse> {
    let collection = parse_entity(&entity)?;
    registry
        .engine(collection)
        .delete(&id)
        .map_err(error_response)?;
    Ok(Json(MessageBody {
        message: "Deleted".to_string(),
    }))
}

fn parse_entity(entity: &str) -> Result<Collection, ErrorResponse> {
    Collection::from_name(entity).ok_or_else(not_found)
}

fn not_found() -> ErrorResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}

fn error_response(err: EngineError) -> ErrorResponse {
    match err {
        EngineError::NotFound => not_found(),
        EngineError::InvalidReference(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        ),
        EngineError::Store(store_err) => {
            tracing::error!("store failure: {store_err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: store_err.to_string(),
                }),
            )
        }
    }
}
