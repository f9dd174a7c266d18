//! Server lifecycle: bind, serve until a termination signal, then save once.

use crate::routes::build_router;
use crate::settings::Settings;
use crate::shutdown;
use crate::state::AppState;
use crate::store::DocumentStore;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("bind error: {0}")]
    Bind(String),
    #[error("serve error: {0}")]
    Serve(String),
}

/// Run until shutdown. The exit code reflects the final save.
pub async fn run(settings: &Settings) -> Result<ExitCode, ServerError> {
    let store = Arc::new(DocumentStore::new(&settings.config));
    let app = build_router(AppState::new(Arc::clone(&store)));

    let (host, port) = settings.addr();
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {host}:{port}: {e}")))?;
    let port = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(e.to_string()))?
        .port();
    tracing::info!(data_file = %settings.config.display(), "Server is running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    Ok(match shutdown::persist_on_exit(&store).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}
