//! Business logic, one module per operation.
//!
//! Every command is a plain function over an [`ItemStore`](crate::store::ItemStore):
//! it takes validated Rust values, returns Rust values, and never knows whether it was
//! called from an HTTP handler or the command line.

pub mod count;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod print;
pub mod render;
pub mod submit;
pub mod view;

use crate::model::ItemId;

/// Outcome of a submission that may legitimately do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(ItemId),
    /// Nothing to store (blank text, no file), not an error.
    Skipped,
}

impl Submitted {
    pub fn id(&self) -> Option<&ItemId> {
        match self {
            Submitted::Created(id) => Some(id),
            Submitted::Skipped => None,
        }
    }
}

/// Raw bytes plus the file name to hand the client.
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub bytes: Vec<u8>,
}
