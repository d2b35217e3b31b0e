//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every scrawl operation, whether called from an axum handler or the CLI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: raw id strings are checked against the id allowlist
//!   here, before anything reaches storage
//! - **Returns structured types**, never HTTP responses or terminal output
//!
//! `ScrawlApi<S: ItemStore>` is generic over the storage backend:
//! - Production: `ScrawlApi<FileStore>`
//! - Testing: `ScrawlApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::markdown::{self, Theme};
use crate::model::{ItemId, Listing};
use crate::store::ItemStore;

pub struct ScrawlApi<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> ScrawlApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_items(&self) -> Result<Listing> {
        commands::list::run(&self.store)
    }

    pub fn count_items(&self) -> Result<usize> {
        commands::count::run(&self.store)
    }

    pub fn submit_text(&self, text: &str) -> Result<Submitted> {
        commands::submit::text(&self.store, text)
    }

    pub fn submit_link(&self, link: &str) -> Result<ItemId> {
        commands::submit::link(&self.store, link)
    }

    pub fn submit_file(&self, upload_name: &str, bytes: &[u8]) -> Result<Submitted> {
        commands::submit::file(&self.store, upload_name, bytes)
    }

    pub fn print_text(&self, text: &str) -> Result<ItemId> {
        commands::print::run(&self.store, text)
    }

    pub fn render_item(&self, id: &str, theme: Theme) -> Result<String> {
        let id = ItemId::parse(id)?;
        commands::render::run(&self.store, &id, theme)
    }

    /// Render text that is never stored.
    pub fn render_text(&self, text: &str, theme: Theme) -> String {
        markdown::to_html(text, theme)
    }

    pub fn view_item(&self, id: &str) -> Result<Vec<u8>> {
        let id = ItemId::parse(id)?;
        commands::view::run(&self.store, &id)
    }

    pub fn download_item(&self, id: &str) -> Result<Download> {
        let id = ItemId::parse(id)?;
        commands::view::download(&self.store, &id)
    }

    pub fn delete_item(&self, id: &str) -> Result<()> {
        let id = ItemId::parse(id)?;
        commands::delete::run(&self.store, &id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{Download, Submitted};
