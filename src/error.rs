//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("validation: {0}")]
    Validation(String),
    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Route not found")]
    RouteNotFound(String),
    #[error("Item not found")]
    ItemNotFound { route: String, id: String },
    #[error("No matching results found")]
    NoResults,
    #[error("Missing property: '{0}' in request body")]
    MissingProperty(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("no ids left in '{0}'")]
    IdsExhausted(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::IdsExhausted(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RouteNotFound(_) | AppError::ItemNotFound { .. } | AppError::NoResults => {
                StatusCode::NOT_FOUND
            }
            AppError::MissingProperty(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(ConfigError::Write { .. }) => "write_error",
            AppError::Config(_) => "load_error",
            AppError::RouteNotFound(_) => "route_not_found",
            AppError::ItemNotFound { .. } => "item_not_found",
            AppError::NoResults => "no_results",
            AppError::MissingProperty(_) => "missing_property",
            AppError::BadRequest(_) => "bad_request",
            AppError::IdsExhausted(_) => "ids_exhausted",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            // Storage failures stay opaque to the caller; details go to the log.
            AppError::Config(e) => {
                tracing::error!(error = %e, "data file failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            code: self.code(),
            message,
        };
        (self.status(), Json(body)).into_response()
    }
}
