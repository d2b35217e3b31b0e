use crate::commands::Submitted;
use crate::error::Result;
use crate::model::{sanitize_upload_name, ItemId};
use crate::store::ItemStore;

/// Store a note. Blank (whitespace-only) text is skipped, anything else is kept verbatim.
pub fn text<S: ItemStore>(store: &S, text: &str) -> Result<Submitted> {
    if text.trim().is_empty() {
        return Ok(Submitted::Skipped);
    }
    let id = ItemId::new_note();
    store.create(&id, text.as_bytes())?;
    tracing::info!(%id, bytes = text.len(), "note created");
    Ok(Submitted::Created(id))
}

/// Store a link. Links are written as given, even when empty.
pub fn link<S: ItemStore>(store: &S, link: &str) -> Result<ItemId> {
    let id = ItemId::new_link();
    store.create(&id, link.as_bytes())?;
    tracing::info!(%id, "link created");
    Ok(id)
}

/// Store an uploaded file under `file-<token><sanitized name>`.
///
/// An upload whose name sanitizes to nothing counts as no upload at all.
pub fn file<S: ItemStore>(store: &S, upload_name: &str, bytes: &[u8]) -> Result<Submitted> {
    let Some(name) = sanitize_upload_name(upload_name) else {
        return Ok(Submitted::Skipped);
    };
    let id = ItemId::new_file(&name)?;
    store.create(&id, bytes)?;
    tracing::info!(%id, bytes = bytes.len(), "file stored");
    Ok(Submitted::Created(id))
}
