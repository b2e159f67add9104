//! JSON file profile store.
//!
//! The roster is one pretty-printed JSON array of profiles. Writes go to a
//! temp file in the same directory and are renamed over the target, so a
//! reader never sees a half-written roster.
//!
//! Entries that fail to decode are skipped on load. Before the first write
//! over a file that did not decode cleanly, the file is copied to
//! `<path>.bak` so the skipped entries are never lost.

use std::io::Write;
use std::path::{Path, PathBuf};

use rota_core::entities::Profile;

use super::ProfileRepository;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct JsonFileProfileRepository {
    path: PathBuf,
}

impl JsonFileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the previous contents go when they could not be fully decoded.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Copy the current file aside if it holds anything `load` would drop.
    fn back_up_if_lossy(&self) -> Result<(), StoreError> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Ok(());
        };
        if raw.trim().is_empty() || serde_json::from_str::<Vec<Profile>>(&raw).is_ok() {
            return Ok(());
        }

        let backup = self.backup_path();
        std::fs::copy(&self.path, &backup).map_err(|e| self.io_error(e))?;
        tracing::warn!(backup = %backup.display(), "profile store had undecodable entries; kept a copy");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProfileRepository for JsonFileProfileRepository {
    /// Missing or unreadable files load as an empty roster. A file that is not
    /// a JSON array loads as empty too; inside an array, only the entries
    /// that fail to decode are dropped.
    fn load(&self) -> Vec<Profile> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no profile store yet");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "profile store unreadable; treating as empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "profile store malformed; treating as empty");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Profile>(entry) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), index, error = %e, "skipping undecodable profile");
                    None
                }
            })
            .collect()
    }

    fn replace(&mut self, profiles: Vec<Profile>) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;
        self.back_up_if_lossy()?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        serde_json::to_writer_pretty(&mut tmp, &profiles)?;
        tmp.write_all(b"\n").map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::info!(path = %self.path.display(), count = profiles.len(), "profile store replaced");
        Ok(())
    }
}
