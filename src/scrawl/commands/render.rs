use crate::error::Result;
use crate::markdown::{self, Theme};
use crate::model::ItemId;
use crate::store::ItemStore;

use super::helpers::read_existing;

/// Markdown-render a stored item. Missing items are `ItemNotFound`.
pub fn run<S: ItemStore>(store: &S, id: &ItemId, theme: Theme) -> Result<String> {
    let bytes = read_existing(store, id)?;
    Ok(markdown::to_html(&String::from_utf8_lossy(&bytes), theme))
}
