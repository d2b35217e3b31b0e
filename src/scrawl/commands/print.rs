use crate::error::Result;
use crate::model::ItemId;
use crate::store::ItemStore;

/// Replace the shared print slot with `text` and return its id.
///
/// The slot is global: the last writer wins for every reader. The store's
/// atomic overwrite keeps readers from ever seeing half a write.
pub fn run<S: ItemStore>(store: &S, text: &str) -> Result<ItemId> {
    let id = ItemId::scratch();
    store.overwrite(&id, text.as_bytes())?;
    tracing::debug!(bytes = text.len(), "print slot replaced");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::count;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn overwrites_single_slot() {
        let store = InMemoryStore::new();
        run(&store, "first").unwrap();
        let id = run(&store, "second").unwrap();

        assert!(id.is_scratch());
        assert_eq!(store.read(&id).unwrap().unwrap(), b"second".to_vec());
        assert_eq!(store.list_ids().unwrap().len(), 1);
    }

    #[test]
    fn scratch_is_not_counted() {
        let store = InMemoryStore::new();
        run(&store, "# Title").unwrap();
        assert_eq!(count::run(&store).unwrap(), 0);
    }
}
