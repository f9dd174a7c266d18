//! Termination handling: wait for Ctrl-C or SIGTERM, then save the document once.

use crate::error::ConfigError;
use crate::store::{DocumentStore, FlushOutcome};

/// Resolves when the process is asked to terminate.
pub async fn signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Final save of the last-loaded document. The outcome is logged here; callers pick the exit status.
pub async fn persist_on_exit(store: &DocumentStore) -> Result<FlushOutcome, ConfigError> {
    let outcome = store.flush().await;
    match &outcome {
        Ok(FlushOutcome::NothingLoaded) => tracing::info!("no data loaded, nothing to save"),
        Ok(FlushOutcome::Saved) => tracing::info!(path = %store.path().display(), "data saved"),
        Err(e) => tracing::error!(error = %e, "saving data on shutdown failed"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exits_cleanly_when_nothing_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("missing").join("data.json"));
        assert_eq!(persist_on_exit(&store).await.unwrap(), FlushOutcome::NothingLoaded);
    }

    #[tokio::test]
    async fn fails_when_final_save_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        tokio::fs::write(&path, r#"[{"route":"pet","data":[]}]"#).await.unwrap();
        let store = DocumentStore::new(&path);
        drop(store.load().await.unwrap());

        // Replacing the file with a directory makes the final rename fail.
        tokio::fs::remove_file(&path).await.unwrap();
        tokio::fs::create_dir(&path).await.unwrap();
        tokio::fs::write(path.join("keep"), "x").await.unwrap();
        assert!(matches!(persist_on_exit(&store).await, Err(ConfigError::Write { .. })));
    }

    #[tokio::test]
    async fn saves_last_loaded_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        tokio::fs::write(&path, r#"[{"route":"pet","data":[{"id":4}]}]"#).await.unwrap();
        let store = DocumentStore::new(&path);
        drop(store.load().await.unwrap());

        tokio::fs::write(&path, "[]").await.unwrap();
        assert_eq!(persist_on_exit(&store).await.unwrap(), FlushOutcome::Saved);
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"id\": 4"));
    }
}
