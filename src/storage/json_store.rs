use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{IaError, Result};
use crate::utils::fs::{FileMode, read_optional, write_atomic};

/// A JSON object of named records kept in a single file.
///
/// The whole file is read on open and rewritten on [`JsonStore::save`].
/// A missing file is an empty store; the first save creates it.
#[derive(Debug, Clone)]
pub struct JsonStore<R> {
    path: PathBuf,
    mode: FileMode,
    entries: BTreeMap<String, R>,
}

impl<R> JsonStore<R>
where
    R: Serialize + DeserializeOwned,
{
    /// Open the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_mode(path, FileMode::Default)
    }

    /// Open a store whose file must only be readable by its owner.
    pub fn open_private(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_mode(path, FileMode::Private)
    }

    fn open_with_mode(path: impl Into<PathBuf>, mode: FileMode) -> Result<Self> {
        let path = path.into();
        let entries = match read_optional(&path)? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(|err| IaError::StoreCorrupt {
                    path: path.clone(),
                    reason: err.to_string(),
                })?
            }
            _ => BTreeMap::new(),
        };
        debug!(path = %path.display(), entries = entries.len(), "opened store");
        Ok(Self {
            path,
            mode,
            entries,
        })
    }

    /// Persist every entry, replacing the file atomically.
    pub fn save(&self) -> Result<()> {
        let rendered = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, rendered.as_bytes(), self.mode)?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "saved store");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R> JsonStore<R> {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&R> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace a record. Returns the replaced record.
    pub fn insert(&mut self, key: impl Into<String>, record: R) -> Option<R> {
        self.entries.insert(key.into(), record)
    }

    pub fn remove(&mut self, key: &str) -> Option<R> {
        self.entries.remove(key)
    }

    /// Record names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
