// src/core/vault.rs
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::models::VaultRecord;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to replace vault file: {0}")]
    PersistError(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// Append-only list of saved passwords backed by a single JSON file.
///
/// Every append rewrites the whole file. The rewrite goes through a temporary
/// file in the same directory that is renamed over the target, so readers see
/// either the old or the new contents. Concurrent writers are not supported:
/// the last one to rename wins.
///
/// Entries are kept as raw JSON on rewrite, so records this version cannot
/// interpret survive an append untouched.
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unparsable vault file is moved before a fresh one is written.
    pub fn corrupt_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "vault".into());
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    /// Load every readable record in insertion order.
    ///
    /// A missing, unreadable or malformed file yields an empty list. Entries
    /// that are not valid records are skipped.
    pub fn load_all(&self) -> Vec<VaultRecord> {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to read vault file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping vault entry #{}: {}", i + 1, e);
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.load_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append(&self, record: VaultRecord) -> Result<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(VaultError::JsonError(e)) => {
                self.set_aside_corrupt(&e)?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        entries.push(serde_json::to_value(&record)?);
        self.write_all(&entries)?;
        log::info!(
            "Saved record #{} to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    // Missing file is an empty vault; anything else that fails is an error
    fn read_entries(&self) -> Result<Vec<Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No vault file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn set_aside_corrupt(&self, cause: &serde_json::Error) -> Result<()> {
        let target = self.corrupt_path();
        fs::rename(&self.path, &target)?;
        log::warn!(
            "Vault file {} is not a JSON list ({}); moved it to {}",
            self.path.display(),
            cause,
            target.display()
        );
        Ok(())
    }

    fn write_all(&self, entries: &[Value]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let mut tmp = NamedTempFile::new_in(&dir)?;
        {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut serializer =
                serde_json::Serializer::with_formatter(tmp.as_file_mut(), formatter);
            entries.serialize(&mut serializer)?;
        }
        tmp.as_file_mut().flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}
