//! Core services for feed aggregation.
//!
//! - `feed`: Query composition, anchor resolution, and page assembly
//! - `runner`: Remote execution of composed queries against the backend

pub mod feed;
pub mod runner;
