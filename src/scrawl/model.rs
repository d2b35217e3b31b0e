use crate::error::{Result, ScrawlError};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

pub const SCRATCH_ID: &str = "temporary-print";
pub const LINK_PREFIX: &str = "link-";
pub const FILE_PREFIX: &str = "file-";

/// Hex chars of random token between `file-` and the uploaded name. Part of the id
/// format: the uploaded name is recovered by skipping exactly this many.
pub const UPLOAD_TOKEN_LEN: usize = 8;

const MAX_ID_LEN: usize = 255;
const MAX_UPLOAD_NAME_LEN: usize = 200;

/// What an item is, as told by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Note,
    Link,
    File,
    Scratch,
}

/// The name of one stored item, which is also its file name in the data directory.
///
/// Every `ItemId` has passed the allowlist in [`ItemId::parse`], so joining it onto
/// the storage root can never escape that root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Validates an identifier coming from the outside world (URL path, directory scan).
    ///
    /// Accepted: 1-255 bytes of ASCII `[A-Za-z0-9._-]`, not starting with a dot.
    pub fn parse(raw: &str) -> Result<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && !raw.starts_with('.')
            && raw.bytes().all(is_id_byte);
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ScrawlError::InvalidId(raw.to_string()))
        }
    }

    pub fn scratch() -> Self {
        Self(SCRATCH_ID.to_string())
    }

    pub fn new_note() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new_link() -> Self {
        Self(format!("{}{}", LINK_PREFIX, Uuid::new_v4()))
    }

    /// Builds an upload id from an already sanitized name (see [`sanitize_upload_name`]).
    pub fn new_file(upload_name: &str) -> Result<Self> {
        let token = Uuid::new_v4().simple().to_string();
        Self::parse(&format!(
            "{}{}{}",
            FILE_PREFIX,
            &token[..UPLOAD_TOKEN_LEN],
            upload_name
        ))
    }

    pub fn kind(&self) -> ItemKind {
        if self.0 == SCRATCH_ID {
            ItemKind::Scratch
        } else if self.0.starts_with(LINK_PREFIX) {
            ItemKind::Link
        } else if self.0.starts_with(FILE_PREFIX) {
            ItemKind::File
        } else {
            ItemKind::Note
        }
    }

    pub fn is_scratch(&self) -> bool {
        self.kind() == ItemKind::Scratch
    }

    /// File name to offer on download: the uploaded name for files, the id otherwise.
    pub fn download_name(&self) -> &str {
        match self.kind() {
            ItemKind::File => {
                let rest = &self.0[FILE_PREFIX.len()..];
                match rest.get(UPLOAD_TOKEN_LEN..) {
                    Some(name) if !name.is_empty() => name,
                    _ => rest,
                }
            }
            _ => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-')
}

/// Reduces a client-supplied upload name to something safe to embed in an [`ItemId`].
///
/// Keeps only the last path component, replaces anything outside `[A-Za-z0-9._-]`
/// with `_`, drops leading dots and caps the length. Returns `None` only when
/// nothing is left, which callers treat as "no file was uploaded".
pub fn sanitize_upload_name(raw: &str) -> Option<String> {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or("");
    let mapped: String = last
        .chars()
        .map(|c| {
            if c.is_ascii() && is_id_byte(c as u8) {
                c
            } else {
                '_'
            }
        })
        .collect();
    let mut name = mapped.trim_start_matches('.').to_string();
    name.truncate(MAX_UPLOAD_NAME_LEN);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteEntry {
    pub id: ItemId,
    pub preview: String,
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkEntry {
    pub id: ItemId,
    pub url: String,
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub id: ItemId,
    pub filename: String,
    pub modified: Option<DateTime<Utc>>,
}

/// Everything currently stored, split by kind. The scratch buffer never appears here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Listing {
    pub notes: Vec<NoteEntry>,
    pub links: Vec<LinkEntry>,
    pub files: Vec<FileEntry>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.notes.len() + self.links.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
