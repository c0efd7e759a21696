//! Domain models and data structures for feed aggregation.
//!
//! This module contains all the core data structures used throughout the crate:
//!
//! - `backend`: Typed decoding of the query backend's response payloads
//! - `config`: Backend configuration loading and validation
//! - `core`: Core domain values (AddressSet, PaginationWindow)
//! - `stacks`: Stacks chain records (transactions, events, feed pages)

mod backend;
mod config;
mod core;
mod stacks;

// Re-export backend payload types
pub use backend::{ColumnarPayload, QueryResponse};

// Re-export core types
pub use core::{AddressSet, PaginationWindow};

// Re-export chain record types
pub use stacks::{Event, EventKind, FeedEntry, FeedPage, TokenProperties, Transaction};

// Re-export config types
pub use config::{BackendConfig, ConfigError};
