use crate::commands::Download;
use crate::error::Result;
use crate::model::ItemId;
use crate::store::ItemStore;

use super::helpers::read_existing;

/// Raw bytes of an item, untouched.
pub fn run<S: ItemStore>(store: &S, id: &ItemId) -> Result<Vec<u8>> {
    read_existing(store, id)
}

/// Raw bytes plus the name the client should save them under.
pub fn download<S: ItemStore>(store: &S, id: &ItemId) -> Result<Download> {
    let bytes = read_existing(store, id)?;
    Ok(Download {
        filename: id.download_name().to_string(),
        bytes,
    })
}
