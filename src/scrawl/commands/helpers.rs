use crate::error::{Result, ScrawlError};
use crate::model::ItemId;
use crate::store::ItemStore;

/// Read an item that is expected to exist.
pub fn read_existing<S: ItemStore>(store: &S, id: &ItemId) -> Result<Vec<u8>> {
    store
        .read(id)?
        .ok_or_else(|| ScrawlError::ItemNotFound(id.to_string()))
}

/// Ids of everything that shows up in the listing (the scratch slot never does).
pub fn listable_ids<S: ItemStore>(store: &S) -> Result<Vec<ItemId>> {
    Ok(store
        .list_ids()?
        .into_iter()
        .filter(|id| !id.is_scratch())
        .collect())
}

/// First line of the text, without its line ending. Empty content gives "".
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
