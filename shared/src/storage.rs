//! JSON file stores for the public price history and the private simulation state.
//!
//! Loading never fails: a missing or unreadable file falls back to an empty
//! history / default state with a warning. Saving creates parent directories
//! and replaces the file through a temporary sibling.

use crate::models::HistoryFile;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use stocksim_rs::data::{PriceHistory, SimState};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from store write operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the loaded history came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    /// Parsed from the wrapped document older chart pages expect
    Legacy,
    Missing,
    Malformed,
}

/// History read from disk, plus any state embedded by the legacy format
#[derive(Debug, Clone)]
pub struct LoadedHistory {
    pub history: PriceHistory,
    pub legacy_meta: Option<SimState>,
    pub status: LoadStatus,
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}

/// Public history file (`docs/<symbol>_history.json`)
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    max_len: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, max_len: usize) -> Self {
        Self {
            path: path.into(),
            max_len,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and normalize the history; missing or malformed files yield an empty one
    pub fn load(&self) -> LoadedHistory {
        let empty = |status| LoadedHistory {
            history: PriceHistory::new(self.max_len),
            legacy_meta: None,
            status,
        };

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No history at {}, starting fresh", self.path.display());
                return empty(LoadStatus::Missing);
            }
            Err(e) => {
                warn!("Could not read history {}: {}, starting fresh", self.path.display(), e);
                return empty(LoadStatus::Malformed);
            }
        };

        match serde_json::from_str::<HistoryFile>(&raw) {
            Ok(file) => {
                let status = if file.is_legacy() {
                    info!("History {} is a legacy document, migrating", self.path.display());
                    LoadStatus::Legacy
                } else {
                    LoadStatus::Loaded
                };
                let (points, legacy_meta) = file.into_parts();
                let history = PriceHistory::from_points(points, self.max_len);
                debug!("Loaded {} points from {}", history.len(), self.path.display());
                LoadedHistory {
                    history,
                    legacy_meta,
                    status,
                }
            }
            Err(e) => {
                warn!("Malformed history {}: {}, starting fresh", self.path.display(), e);
                empty(LoadStatus::Malformed)
            }
        }
    }

    /// Write the history as a plain JSON array
    pub fn save(&self, history: &PriceHistory) -> Result<(), StorageError> {
        write_json(&self.path, history.points())?;
        debug!("Saved {} points to {}", history.len(), self.path.display());
        Ok(())
    }
}

/// Private simulation state file (`.data/<symbol>_meta.json`)
#[derive(Debug, Clone)]
pub struct MetaStore {
    path: PathBuf,
}

impl MetaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored state, or `None` when the file is missing or unreadable
    pub fn load(&self) -> Option<SimState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read state {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Malformed state {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Stored state, then legacy state, then the default
    pub fn load_or(&self, legacy: Option<SimState>) -> SimState {
        self.load().or(legacy).unwrap_or_default()
    }

    pub fn save(&self, state: &SimState) -> Result<(), StorageError> {
        write_json(&self.path, state)
    }
}
