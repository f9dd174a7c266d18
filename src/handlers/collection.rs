//! Collection handlers: list with filters, read by id, create.

use crate::config::{Document, Record};
use crate::error::AppError;
use crate::service::{CrudService, ListQuery};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Default, Deserialize)]
pub struct ReadQuery {
    #[serde(rename = "_embed")]
    pub embed: Option<String>,
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn ensure_route(document: &Document, route: &str) -> Result<(), AppError> {
    match document.collection(route) {
        Some(_) => Ok(()),
        None => Err(AppError::RouteNotFound(route.to_string())),
    }
}

// Extractor rejections are resolved after the route lookup so unknown routes stay 404.

pub async fn list(
    State(state): State<AppState>,
    Path(route): Path<String>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Record>>, AppError> {
    let loaded = state.store.load().await?;
    ensure_route(loaded.document(), &route)?;
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let rows = CrudService::list(loaded.document(), &route, &query)?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path((route, id)): Path<(String, String)>,
    query: Result<Query<ReadQuery>, QueryRejection>,
) -> Result<Json<Record>, AppError> {
    let loaded = state.store.load().await?;
    ensure_route(loaded.document(), &route)?;
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let record = CrudService::read(loaded.document(), &route, &id, query.embed.as_deref())?;
    Ok(Json(record))
}

pub async fn create(
    State(state): State<AppState>,
    Path(route): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let mut loaded = state.store.load().await?;
    ensure_route(loaded.document(), &route)?;
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let body = body_to_map(body)?;
    let record = CrudService::create(&mut loaded, &route, body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
