//! # Document Store
//!
//! Owns the single JSON file that holds every order, the pricing config,
//! and the settings bag.
//!
//! ## Read-Modify-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store::mutate(f)                                   │
//! │                                                                         │
//! │  request ──► lock ──► load file ──► f(&mut Document) ──► save ──► unlock│
//! │                                          │                              │
//! │                                          └─ Err ──► unlock (no write)   │
//! │                                                                         │
//! │  Concurrent requests queue on the lock, so two creates can never        │
//! │  read the same document and overwrite each other.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomic Save
//! The full document is written to a sibling temp file and renamed over
//! the data file. A crash mid-write leaves the previous document intact.
//!
//! ## Corruption Recovery
//! A missing, empty, unreadable, or malformed file is replaced with the
//! default document before anything reads it. An unreadable file or
//! non-empty malformed content is first renamed to
//! `<file>.corrupt-<timestamp>-<id>` so it can be inspected. If that rename
//! fails the reset is refused and the load reports a storage error.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use stitch_core::{CoreResult, Document, Stats};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::repository::order::OrderLedger;
use crate::repository::pricing::ConfigManager;
use crate::repository::settings::SettingsRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use stitch_store::StoreConfig;
///
/// let config = StoreConfig::new("./data/orders.json").pretty(false);
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the JSON data file. Created if it doesn't exist.
    pub path: PathBuf,

    /// Pretty-print the document on save.
    /// Default: true (the file is meant to be readable by hand)
    pub pretty: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            pretty: true,
        }
    }

    /// Sets whether saved documents are pretty-printed.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle to the document store.
///
/// Cheap to clone; every clone shares the same writer lock.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::open(StoreConfig::new("orders.json")).await?;
///
/// let order = store.orders().create(&body).await?;
/// let stats = store.stats().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: StoreConfig,
    lock: Mutex<()>,
}

impl Store {
    /// Opens the store, creating the data file's directory and seeding
    /// the default document if needed.
    ///
    /// Failure here means the server cannot persist anything and should
    /// not start.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(path = %config.path.display(), "Opening document store");

        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Open {
                    path: config.path.clone(),
                    source,
                })?;
        }

        let store = Store {
            inner: Arc::new(Inner {
                config,
                lock: Mutex::new(()),
            }),
        };

        let doc = store.load().await?;
        info!(orders = doc.orders.len(), "Document store ready");

        Ok(store)
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.inner.config.path
    }

    /// Reads the current document.
    ///
    /// Takes the writer lock so a corruption reset cannot interleave with
    /// a save.
    pub async fn load(&self) -> StoreResult<Document> {
        let _guard = self.inner.lock.lock().await;
        self.load_unlocked().await
    }

    /// Replaces the whole document, with the same atomic write as
    /// [`Store::mutate`].
    pub async fn save(&self, doc: &Document) -> StoreResult<()> {
        let _guard = self.inner.lock.lock().await;
        self.save_unlocked(doc).await
    }

    /// Runs one locked load → `f` → save cycle.
    ///
    /// If `f` returns an error the file is left untouched and the error is
    /// returned as [`StoreError::Domain`].
    pub async fn mutate<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Document) -> CoreResult<T>,
    {
        let _guard = self.inner.lock.lock().await;
        let mut doc = self.load_unlocked().await?;
        let out = f(&mut doc)?;
        self.save_unlocked(&doc).await?;
        Ok(out)
    }

    /// Returns the order ledger.
    pub fn orders(&self) -> OrderLedger {
        OrderLedger::new(self.clone())
    }

    /// Returns the pricing config manager.
    pub fn pricing(&self) -> ConfigManager {
        ConfigManager::new(self.clone())
    }

    /// Returns the settings repository.
    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(self.clone())
    }

    /// Computes dashboard stats over the current orders. Read-only.
    pub async fn stats(&self) -> StoreResult<Stats> {
        let doc = self.load().await?;
        Ok(stitch_core::stats::compute(&doc.orders))
    }

    // -------------------------------------------------------------------------
    // Unlocked internals (caller holds the lock)
    // -------------------------------------------------------------------------

    async fn load_unlocked(&self) -> StoreResult<Document> {
        let path = self.path();

        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "Data file missing, writing defaults");
                return self.reset_unlocked().await;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Data file unreadable, resetting");
                self.set_aside_unlocked().await?;
                return self.reset_unlocked().await;
            }
        };

        match parse_document(&bytes) {
            Ok(doc) => {
                debug!(orders = doc.orders.len(), "Document loaded");
                Ok(doc)
            }
            Err(reason) => {
                warn!(path = %path.display(), reason = %reason, "Data file invalid, resetting");
                if !bytes.iter().all(u8::is_ascii_whitespace) {
                    self.set_aside_unlocked().await?;
                }
                self.reset_unlocked().await
            }
        }
    }

    async fn reset_unlocked(&self) -> StoreResult<Document> {
        let doc = Document::default();
        self.save_unlocked(&doc).await?;
        Ok(doc)
    }

    async fn save_unlocked(&self, doc: &Document) -> StoreResult<()> {
        let bytes = if self.inner.config.pretty {
            serde_json::to_vec_pretty(doc)?
        } else {
            serde_json::to_vec(doc)?
        };

        let path = self.path();
        let tmp = sibling(path, &format!("{}.tmp", Uuid::new_v4().simple()));

        if let Err(err) = write_then_rename(&tmp, path, &bytes).await {
            // Best effort; the temp file may not exist.
            let _ = fs::remove_file(&tmp).await;
            return Err(err.into());
        }

        debug!(bytes = bytes.len(), orders = doc.orders.len(), "Document saved");
        Ok(())
    }

    /// Moves the current data file out of the way under a unique name.
    async fn set_aside_unlocked(&self) -> StoreResult<()> {
        let path = self.path();
        let backup = sibling(path, &corrupt_suffix());
        fs::rename(path, &backup).await?;
        warn!(backup = %backup.display(), "Moved the invalid data file aside");
        Ok(())
    }
}

async fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(tmp, bytes).await?;
    fs::rename(tmp, path).await
}

/// `data.json` + `suffix` → `data.json.<suffix>` in the same directory.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// `corrupt-20260118T093012Z-1a2b3c4d`: sortable, and unique per call.
fn corrupt_suffix() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("corrupt-{}-{}", Utc::now().format("%Y%m%dT%H%M%SZ"), &id[..8])
}

/// Parses stored bytes into a document.
///
/// Fails on empty input, malformed JSON, a non-object root, or an object
/// whose fields have the wrong shape. Missing fields are filled from
/// defaults.
fn parse_document(bytes: &[u8]) -> Result<Document, String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err("empty file".to_string());
    }
    let value: Value = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err("root is not a JSON object".to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
