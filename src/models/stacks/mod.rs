//! Stacks chain record types.
//!
//! These records are owned by the remote store and read-only from this
//! crate's perspective; they exist to give the engine typed access to the
//! columns it reasons about while preserving the rest of the backend's wide
//! rows untouched.

mod event;
mod feed;
mod token;
mod transaction;

pub use event::{Event, EventKind};
pub use feed::{FeedEntry, FeedPage};
pub use token::TokenProperties;
pub use transaction::Transaction;
