//! Content store: the single markdown file behind the edit API.
//!
//! Nothing is cached. Every read goes to disk. Edits are read-modify-write
//! cycles serialized by a mutex and persisted with an atomic rename, so two
//! concurrent section edits cannot lose each other's changes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::document::{Config, ConfigUpdate, Document, Sections};
use crate::error::{ContentError, Result};
use crate::persist;

pub struct ContentStore {
    path: PathBuf,
    fallback_email: String,
    write_lock: Mutex<()>,
}

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>, fallback_email: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fallback_email: fallback_email.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fallback_email(&self) -> &str {
        &self.fallback_email
    }

    /// Read and parse the file, failing if it cannot be read.
    pub async fn read_document(&self) -> Result<Document> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let mut doc = Document::parse(&text);
        if !doc.has_front_matter {
            tracing::warn!("{} has no front matter", self.path.display());
            doc.ensure_contact_email(&self.fallback_email);
        }
        Ok(doc)
    }

    /// Read the document, serving the fallback document if the file is
    /// missing or unreadable.
    pub async fn load(&self) -> Document {
        match self.read_document().await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!("Error reading {}: {}", self.path.display(), e);
                Document::fallback(&self.fallback_email)
            }
        }
    }

    pub async fn sections(&self) -> Sections {
        self.load().await.sections()
    }

    pub async fn section(&self, name: &str) -> Result<String> {
        self.sections()
            .await
            .get(name)
            .map(str::to_string)
            .ok_or_else(|| ContentError::not_found(format!("section {name}")))
    }

    /// Merge `update` into the front matter and rewrite the file.
    pub async fn update_config(&self, update: &ConfigUpdate) -> Result<Config> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read_for_update().await?;
        doc.apply_config_update(update);
        self.persist(&doc).await?;
        tracing::info!(keys = doc.config.len(), "config updated");
        Ok(doc.config)
    }

    /// Replace one section (adding it if new) and rewrite the whole file.
    ///
    /// Returns the stored, trimmed section text.
    pub async fn update_section(&self, name: &str, text: &str) -> Result<String> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read_for_update().await?;
        doc.replace_section(name, text);
        self.persist(&doc).await?;
        tracing::info!(section = name, "section updated");
        Ok(text.trim().to_string())
    }

    // A missing file starts from the fallback document; any other read
    // error aborts the edit instead of overwriting the file with defaults.
    async fn read_for_update(&self) -> Result<Document> {
        match self.read_document().await {
            Ok(doc) => Ok(doc),
            Err(ContentError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("{} missing, creating it", self.path.display());
                Ok(Document::fallback(&self.fallback_email))
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(&self, doc: &Document) -> Result<()> {
        let path = self.path.clone();
        let text = doc.render();
        tokio::task::spawn_blocking(move || persist::write_atomic(&path, text.as_bytes()))
            .await
            .map_err(|e| std::io::Error::other(format!("write task failed: {e}")))??;
        Ok(())
    }
}

pub type SharedStore = Arc<ContentStore>;
