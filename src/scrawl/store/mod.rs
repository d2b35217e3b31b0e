//! # Storage Layer
//!
//! Scrawl keeps no database. The data directory *is* the database:
//!
//! ```text
//! data/
//! ├── 3f2b...-...-...      # a note (UUID v4)
//! ├── link-3f2b...         # a link
//! ├── file-3f2b1a9cnotes.txt  # an upload (token slice + sanitized name)
//! └── temporary-print      # the shared print-preview slot
//! ```
//!
//! There is no manifest and no metadata sidecar: listing the directory is the index,
//! and an item's kind is read off its file name (see [`crate::model::ItemId::kind`]).
//!
//! ## Write Semantics
//!
//! - Regular items are **write-once**: [`ItemStore::create`] fails with
//!   `ItemExists` rather than clobber a file.
//! - The scratch slot is the only thing ever overwritten, via
//!   [`ItemStore::overwrite`], which must be atomic so readers never see a torn file.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, one file per item in a flat directory.
//! - [`memory::InMemoryStore`]: for testing command logic without touching disk.

use crate::error::Result;
use crate::model::ItemId;
use chrono::{DateTime, Utc};

pub mod fs;
pub mod memory;

/// Raw item storage.
///
/// All methods take `&self` so one store can be shared across request handlers.
pub trait ItemStore: Send + Sync {
    /// Every valid item id currently present, scratch slot included.
    /// Names that fail the id allowlist are skipped.
    fn list_ids(&self) -> Result<Vec<ItemId>>;

    /// Read an item's bytes. `Ok(None)` if it does not exist.
    fn read(&self, id: &ItemId) -> Result<Option<Vec<u8>>>;

    /// Store a new item. Fails with `ItemExists` if the id is taken.
    fn create(&self, id: &ItemId, content: &[u8]) -> Result<()>;

    /// Replace an item's contents wholesale, creating it if needed.
    fn overwrite(&self, id: &ItemId, content: &[u8]) -> Result<()>;

    /// Remove an item. Fails with `ItemNotFound` if it does not exist.
    fn delete(&self, id: &ItemId) -> Result<()>;

    /// Last modification time, `Ok(None)` if the item does not exist.
    fn modified(&self, id: &ItemId) -> Result<Option<DateTime<Utc>>>;
}
