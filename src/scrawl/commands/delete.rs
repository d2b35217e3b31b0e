use crate::error::Result;
use crate::model::ItemId;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S, id: &ItemId) -> Result<()> {
    store.delete(id)?;
    tracing::info!(%id, "item deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{count, list, submit};
    use crate::error::ScrawlError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_item_from_listing() {
        let store = InMemoryStore::new();
        let created = submit::text(&store, "bye").unwrap();
        let id = created.id().unwrap().clone();

        run(&store, &id).unwrap();

        let listing = list::run(&store).unwrap();
        assert!(listing.notes.iter().all(|n| n.id != id));
    }

    #[test]
    fn missing_item_is_not_found() {
        let store = InMemoryStore::new();
        let id = ItemId::parse("ghost").unwrap();
        assert!(matches!(run(&store, &id), Err(ScrawlError::ItemNotFound(_))));
    }

    #[test]
    fn count_tracks_creations_minus_deletions() {
        let store = InMemoryStore::new();
        let mut ids = Vec::new();
        for i in 0..4 {
            let created = submit::text(&store, &format!("note {}", i)).unwrap();
            ids.push(created.id().unwrap().clone());
        }
        ids.push(submit::link(&store, "https://example.com").unwrap());
        for id in ids.iter().take(2) {
            run(&store, id).unwrap();
        }
        assert_eq!(count::run(&store).unwrap(), 3);
    }
}
