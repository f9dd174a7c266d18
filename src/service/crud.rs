//! List, read and create against a loaded document.

use crate::config::{record_id, Collection, Document, Record};
use crate::error::AppError;
use crate::service::embed;
use crate::service::filter::{filter_records, parse_int, ListQuery};
use crate::store::LoadedDocument;
use serde_json::{Map, Value};

pub struct CrudService;

fn collection<'d>(document: &'d Document, route: &str) -> Result<&'d Collection, AppError> {
    document
        .collection(route)
        .ok_or_else(|| AppError::RouteNotFound(route.to_string()))
}

impl CrudService {
    /// Embedding replaces filtering when `_embed` names a known relation.
    /// Otherwise filters apply and an empty result is `NoResults`.
    pub fn list(document: &Document, route: &str, query: &ListQuery) -> Result<Vec<Record>, AppError> {
        let collection = collection(document, route)?;

        if let Some(spec) = embed::resolve(query.embed.as_deref()) {
            return Ok(spec.decorate_all(&collection.data, document));
        }

        let rows = filter_records(&collection.data, query);
        if rows.is_empty() {
            return Err(AppError::NoResults);
        }
        Ok(rows.into_iter().cloned().collect())
    }

    pub fn read(
        document: &Document,
        route: &str,
        id_str: &str,
        embed: Option<&str>,
    ) -> Result<Record, AppError> {
        let collection = collection(document, route)?;
        let not_found = || AppError::ItemNotFound {
            route: route.to_string(),
            id: id_str.to_string(),
        };
        let id = parse_int(id_str).ok_or_else(not_found)?;
        let record = collection
            .data
            .iter()
            .find(|r| record_id(r).is_some_and(|rid| rid as f64 == id))
            .ok_or_else(not_found)?;

        Ok(match embed::resolve(embed) {
            Some(spec) => spec.decorate(record, document),
            None => record.clone(),
        })
    }

    /// Check required properties, assign the next id and append. Nothing changes on error.
    pub fn insert(document: &mut Document, route: &str, body: Map<String, Value>) -> Result<Record, AppError> {
        let collection = document
            .collection_mut(route)
            .ok_or_else(|| AppError::RouteNotFound(route.to_string()))?;

        if let Some(missing) = collection.properties.iter().find(|p| !body.contains_key(p.as_str())) {
            return Err(AppError::MissingProperty(missing.clone()));
        }

        let id = collection
            .next_id()
            .ok_or_else(|| AppError::IdsExhausted(route.to_string()))?;
        let mut record = Record::new();
        record.insert("id".into(), Value::from(id));
        record.extend(body.into_iter().filter(|(k, _)| k != "id"));
        collection.data.push(record.clone());
        Ok(record)
    }

    /// Insert then persist. A failed write removes the appended record again.
    pub async fn create(
        loaded: &mut LoadedDocument<'_>,
        route: &str,
        body: Map<String, Value>,
    ) -> Result<Record, AppError> {
        let record = Self::insert(loaded.document_mut(), route, body)?;
        if let Err(e) = loaded.save().await {
            if let Some(collection) = loaded.document_mut().collection_mut(route) {
                collection.data.pop();
            }
            return Err(e.into());
        }
        tracing::info!(route = %route, id = ?record_id(&record), "created record");
        Ok(record)
    }
}
