//! JSON mock API: a fake REST backend serving collections from one JSON file.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod service;
pub mod settings;
pub mod shutdown;
pub mod state;
pub mod store;

pub use config::{read_document, write_document, Collection, Document, Record};
pub use error::{AppError, ConfigError};
pub use routes::{build_router, collection_routes};
pub use service::{CrudService, ListQuery};
pub use settings::Settings;
pub use state::AppState;
pub use store::DocumentStore;
