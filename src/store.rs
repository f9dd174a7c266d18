//! Document store: owns the last-loaded document and the data file path.
//!
//! Every request reloads the file under the store's lock, so a create computes
//! its id and writes back without another request interleaving.

use crate::config::{read_document, write_document, Document};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

pub struct DocumentStore {
    path: PathBuf,
    current: Mutex<Option<Document>>,
}

/// Exclusive access to a freshly loaded document for the length of one request.
pub struct LoadedDocument<'a> {
    path: &'a Path,
    guard: MappedMutexGuard<'a, Document>,
}

/// Outcome of the final flush on shutdown.
#[derive(Debug, PartialEq, Eq)]
pub enum FlushOutcome {
    /// Nothing was ever loaded, so nothing was written.
    NothingLoaded,
    Saved,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the data file and replace the in-memory document.
    /// On failure the previous snapshot is kept.
    pub async fn load(&self) -> Result<LoadedDocument<'_>, ConfigError> {
        let guard = self.current.lock().await;
        let document = read_document(&self.path).await?;
        let guard = MutexGuard::map(guard, |slot| slot.insert(document));
        Ok(LoadedDocument {
            path: &self.path,
            guard,
        })
    }

    /// Copy of the last-loaded document, if any.
    pub async fn snapshot(&self) -> Option<Document> {
        self.current.lock().await.clone()
    }

    /// Write the last-loaded document back to disk, if one was ever loaded.
    pub async fn flush(&self) -> Result<FlushOutcome, ConfigError> {
        let guard = self.current.lock().await;
        match guard.as_ref() {
            None => Ok(FlushOutcome::NothingLoaded),
            Some(document) => {
                write_document(&self.path, document).await?;
                Ok(FlushOutcome::Saved)
            }
        }
    }
}

impl LoadedDocument<'_> {
    pub fn document(&self) -> &Document {
        &self.guard
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.guard
    }

    /// Persist the document while still holding the lock.
    pub async fn save(&self) -> Result<(), ConfigError> {
        write_document(self.path, self.document()).await
    }
}
