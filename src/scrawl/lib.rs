//! # Scrawl Architecture
//!
//! Scrawl is a personal scratchpad served over HTTP: notes, links and uploaded files,
//! each stored as one plain file in a flat data directory, with a listing page and
//! markdown rendering on top.
//!
//! The web server is one client of a small library; the command line is another.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────┐  ┌──────────────────────────────┐
//! │  Web Layer (web/)                    │  │  CLI (main.rs, args.rs)      │
//! │  - axum routes, forms, redirects     │  │  - list / count / view / rm  │
//! │  - minijinja pages                   │  │  - starts the server         │
//! └──────────────────────────────────────┘  └──────────────────────────────┘
//!                    │                                   │
//!                    ▼                                   ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                                     │
//! │  - Thin facade over commands                                            │
//! │  - Validates raw id strings into `ItemId`s                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                                          │
//! │  - list, submit, print, render, view, delete, count                     │
//! │  - Operates on Rust types, returns Rust types                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                                 │
//! │  - ItemStore trait                                                      │
//! │  - FileStore (production), InMemoryStore (testing)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Items and Identifiers
//!
//! An item's id is its file name, and its kind is read off the id's prefix:
//! `link-…` is a link, `file-…` an upload, `temporary-print` the shared print slot,
//! anything else a note. See [`model::ItemId`]. Ids from the outside world are
//! checked against an allowlist before they are ever joined onto a path.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against [`store::memory::InMemoryStore`].
//! 2. **Storage**: `tests/file_store_test.rs` against a temp directory.
//! 3. **HTTP**: `tests/http_test.rs` drives the axum router in-process.
//! 4. **CLI**: `tests/cli_test.rs` runs the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `ItemId`, `ItemKind` and listing types
//! - [`markdown`]: Markdown to HTML per theme
//! - [`config`]: Configuration loading
//! - [`logging`]: tracing subscriber setup
//! - [`web`]: axum router, handlers and templates
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod model;
pub mod store;
pub mod web;
