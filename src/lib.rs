//! Feed aggregation engine for Stacks wallet activity.
//!
//! Given a set of addresses, this crate assembles a time-paginated,
//! event-annotated activity feed by composing correlated queries against a
//! remote chain-data backend and reshaping its columnar responses into row
//! records.
//!
//! # Architecture
//! The engine is built around a small number of components:
//! - Models: address sets, pagination windows, chain records, and the typed
//!   backend response payload
//! - Feed service: query composition, anchor resolution, and page assembly
//! - Query runner: HTTP execution of composed queries against the backend
//!
//! # Flow
//! 1. Normalize the caller-supplied addresses into an ordered distinct set
//! 2. Compose the unified feed query anchored at the requested page window
//! 3. Execute the query against the backend with an optional bearer credential
//! 4. Reshape the columnar response into rows and decode the feed entries
//! 5. Return the page; backend failures degrade to an empty page, never an error

pub mod models;
pub mod services;
pub mod utils;
