//! Generic handlers shared by every entity kind. Each one validates what it
//! can before touching storage, then makes exactly one store call.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::{Record, Store};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    errors::JsonApiError,
    extract::{JsonBody, QueryParams},
    state::AppState,
};

/// A path id that is not a UUID cannot name a record, so it answers exactly
/// like a miss.
fn parse_id<R: Record>(raw: &str) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|e| {
        debug!(entity = R::KIND, id = raw, error = %e, "malformed path id");
        JsonApiError::not_found(R::KIND)
    })
}

pub async fn list<R, D>(
    State(state): State<AppState<D>>,
    QueryParams(filter): QueryParams<R::Filter>,
) -> Result<Json<Vec<R>>, JsonApiError>
where
    R: Record,
    D: Store<R> + 'static,
{
    let rows = Store::<R>::list(&*state.backend, &filter).await?;
    info!(entity = R::KIND, count = rows.len(), "list");
    Ok(Json(rows))
}

pub async fn create<R, D>(
    State(state): State<AppState<D>>,
    JsonBody(record): JsonBody<R>,
) -> Result<(StatusCode, Json<R>), JsonApiError>
where
    R: Record,
    D: Store<R> + 'static,
{
    let created = Store::<R>::create(&*state.backend, record).await?;
    info!(entity = R::KIND, id = %created.id(), "created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get<R, D>(
    State(state): State<AppState<D>>,
    Path(raw_id): Path<String>,
) -> Result<Json<R>, JsonApiError>
where
    R: Record,
    D: Store<R> + 'static,
{
    let id = parse_id::<R>(&raw_id)?;
    let found = Store::<R>::get(&*state.backend, id).await?;
    Ok(Json(found))
}

pub async fn update<R, D>(
    State(state): State<AppState<D>>,
    Path(raw_id): Path<String>,
    JsonBody(record): JsonBody<R>,
) -> Result<Json<R>, JsonApiError>
where
    R: Record,
    D: Store<R> + 'static,
{
    let id = parse_id::<R>(&raw_id)?;
    if record.id() != id {
        debug!(entity = R::KIND, path_id = %id, body_id = %record.id(), "id mismatch");
        return Err(JsonApiError::id_mismatch());
    }
    let updated = Store::<R>::update(&*state.backend, record).await?;
    info!(entity = R::KIND, %id, "updated");
    Ok(Json(updated))
}

pub async fn delete<R, D>(
    State(state): State<AppState<D>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, JsonApiError>
where
    R: Record,
    D: Store<R> + 'static,
{
    let id = parse_id::<R>(&raw_id)?;
    Store::<R>::delete(&*state.backend, id).await?;
    info!(entity = R::KIND, %id, "deleted");
    Ok(state.delete_status)
}
