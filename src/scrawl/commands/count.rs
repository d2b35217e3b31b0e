use crate::error::Result;
use crate::store::ItemStore;

use super::helpers::listable_ids;

/// Number of items the listing would show.
pub fn run<S: ItemStore>(store: &S) -> Result<usize> {
    Ok(listable_ids(store)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts_all_kinds_but_scratch() {
        let fixture = StoreFixture::new()
            .with_notes(3)
            .with_item("link-1", "https://example.com")
            .with_item("file-abcdefghx.txt", "x")
            .with_scratch("not counted");
        assert_eq!(run(&fixture.store).unwrap(), 5);
    }

    #[test]
    fn empty_store_counts_zero() {
        let fixture = StoreFixture::new();
        assert_eq!(run(&fixture.store).unwrap(), 0);
    }
}
