//! Collection routes. Path extractors receive the route segment and id; handlers resolve the collection.

use crate::handlers::collection::{create, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn collection_routes(state: AppState) -> Router {
    Router::new()
        .route("/:route", get(list).post(create))
        .route("/:route/:id", get(read))
        .with_state(state)
}
