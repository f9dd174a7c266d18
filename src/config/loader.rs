//! Read and write the data file.

use crate::config::{validate, Document};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Read, parse and validate the document at `path`.
pub async fn read_document(path: &Path) -> Result<Document, ConfigError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let document: Document = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&document)?;
    tracing::debug!(path = %path.display(), collections = document.collections.len(), "loaded data file");
    Ok(document)
}

/// Write the document as indented JSON. Goes through a sibling temp file and a rename.
pub async fn write_document(path: &Path, document: &Document) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let body = serde_json::to_string_pretty(document)
        .map_err(|e| write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, body).await.map_err(write_err)?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(write_err(e));
    }
    tracing::info!(path = %path.display(), "saved data file");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "data.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
