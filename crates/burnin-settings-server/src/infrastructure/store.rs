//! JSON persistence for the settings document.
//!
//! [`SettingsStore`] owns a single file on disk.  Saves are atomic: the
//! document is written to a `.tmp` sibling first and then renamed over the
//! real path in one step, so a crash or a concurrent read never observes a
//! partially written file — a reader racing a writer sees the old document
//! or the new one, never a mix.
//!
//! Two near-simultaneous saves race at the rename and the last one wins with
//! its *entire* document.  The broker serves a single local editor, so this
//! is an accepted limitation rather than something the store locks against.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use burnin_core::SettingsDocument;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid settings document.
    ///
    /// This is surfaced, not silently defaulted: the permissive
    /// default-on-failure policy belongs to the sanitizer, and applying it
    /// to unreadable storage would destroy the user's file on the next save.
    #[error("settings file at {path} is not a valid settings document: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized to JSON.
    #[error("failed to serialize settings document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Owns the backing settings file and performs all reads and writes to it.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store over `path`.  The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored document.
    ///
    /// Returns `Ok(None)` when the backing file does not exist — first run
    /// is a normal condition, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for file-system errors other than
    /// "not found", and [`StoreError::Malformed`] when the file content is
    /// not a valid settings document.
    pub fn load(&self) -> Result<Option<SettingsDocument>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let document =
                    serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                        path: self.path.clone(),
                        source,
                    })?;
                Ok(Some(document))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Persists `document`, replacing any previous content wholesale.
    ///
    /// The document is pretty-printed (the file is meant to be readable and
    /// hand-editable), written to a `.tmp` sibling, then renamed over the
    /// real path.  The rename is the atomic step: rename(2) on POSIX,
    /// `MoveFileEx` with replace on Windows.  Parent directories are created
    /// first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for file-system failures or
    /// [`StoreError::Serialize`] if the document cannot be encoded.
    pub fn save(&self, document: &SettingsDocument) -> Result<(), StoreError> {
        // Ensure the directory exists before writing.  A bare file name has
        // an empty parent, which create_dir_all must not see.
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content =
            serde_json::to_string_pretty(document).map_err(StoreError::Serialize)?;

        let tmp = self.tmp_path();
        std::fs::write(&tmp, content).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Sibling temp path used during a save: `<file>.tmp` in the same
    /// directory, so the final rename never crosses a filesystem boundary.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
