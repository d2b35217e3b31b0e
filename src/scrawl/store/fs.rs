use super::ItemStore;
use crate::error::{Result, ScrawlError};
use crate::model::ItemId;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use uuid::Uuid;

/// Flat-directory store: one file per item, file name = item id.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the data directory if it is missing.
    pub fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ScrawlError::Io)?;
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn item_path(&self, id: &ItemId) -> PathBuf {
        self.root.join(id.as_str())
    }
}

impl ItemStore for FileStore {
    fn list_ids(&self) -> Result<Vec<ItemId>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(ScrawlError::Io)? {
            let entry = entry.map_err(ScrawlError::Io)?;
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::debug!(name = ?entry.file_name(), "skipping non-utf8 file name");
                continue;
            };
            match ItemId::parse(name) {
                Ok(id) => ids.push(id),
                Err(_) => tracing::debug!(name, "skipping file outside the id allowlist"),
            }
        }
        Ok(ids)
    }

    fn read(&self, id: &ItemId) -> Result<Option<Vec<u8>>> {
        match fs::read(self.item_path(id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ScrawlError::Io(e)),
        }
    }

    fn create(&self, id: &ItemId, content: &[u8]) -> Result<()> {
        self.ensure_root()?;

        let path = self.item_path(id);
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ScrawlError::ItemExists(id.to_string()))
            }
            Err(e) => return Err(ScrawlError::Io(e)),
        };
        fill_or_remove(&path, file, content)
    }

    fn overwrite(&self, id: &ItemId, content: &[u8]) -> Result<()> {
        self.ensure_root()?;

        // Atomic write: dot-prefixed temp files are never listed
        let tmp_path = self.root.join(format!(".{}-{}.tmp", id, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(ScrawlError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.item_path(id)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ScrawlError::Io(e));
        }
        Ok(())
    }

    fn delete(&self, id: &ItemId) -> Result<()> {
        match fs::remove_file(self.item_path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ScrawlError::ItemNotFound(id.to_string()))
            }
            Err(e) => Err(ScrawlError::Io(e)),
        }
    }

    fn modified(&self, id: &ItemId) -> Result<Option<DateTime<Utc>>> {
        match fs::metadata(self.item_path(id)) {
            Ok(meta) => {
                let modified: DateTime<Utc> = meta.modified().unwrap_or(SystemTime::now()).into();
                Ok(Some(modified))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ScrawlError::Io(e)),
        }
    }
}

/// Write a freshly created item, removing it again if the write fails so no
/// truncated file is left behind under the id.
fn fill_or_remove<W: Write>(path: &Path, mut file: W, content: &[u8]) -> Result<()> {
    let written = file.write_all(content).and_then(|()| file.flush());
    drop(file);
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(ScrawlError::Io(e));
    }
    Ok(())
}
