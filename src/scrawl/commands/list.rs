use crate::error::Result;
use crate::model::{FileEntry, ItemKind, LinkEntry, Listing, NoteEntry};
use crate::store::ItemStore;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::helpers::{first_line, listable_ids};

pub fn run<S: ItemStore>(store: &S) -> Result<Listing> {
    let mut listing = Listing::default();

    for id in listable_ids(store)? {
        // Deleted between the directory scan and now: just leave it out
        let Some(bytes) = store.read(&id)? else {
            tracing::debug!(%id, "item vanished during listing");
            continue;
        };
        let modified = store.modified(&id)?;

        match id.kind() {
            ItemKind::Note => {
                let text = String::from_utf8_lossy(&bytes);
                let preview = first_line(&text).to_string();
                listing.notes.push(NoteEntry {
                    id,
                    preview,
                    modified,
                });
            }
            ItemKind::Link => {
                let url = String::from_utf8_lossy(&bytes).into_owned();
                listing.links.push(LinkEntry { id, url, modified });
            }
            ItemKind::File => {
                let filename = id.download_name().to_string();
                listing.files.push(FileEntry {
                    id,
                    filename,
                    modified,
                });
            }
            ItemKind::Scratch => {}
        }
    }

    listing
        .notes
        .sort_by(|a, b| newest_first((&a.modified, &a.id), (&b.modified, &b.id)));
    listing
        .links
        .sort_by(|a, b| newest_first((&a.modified, &a.id), (&b.modified, &b.id)));
    listing
        .files
        .sort_by(|a, b| newest_first((&a.modified, &a.id), (&b.modified, &b.id)));

    Ok(listing)
}

fn newest_first<I: Ord>(
    a: (&Option<DateTime<Utc>>, &I),
    b: (&Option<DateTime<Utc>>, &I),
) -> Ordering {
    b.0.cmp(a.0).then_with(|| a.1.cmp(b.1))
}
