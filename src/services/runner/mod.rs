//! Remote query execution against the analytical backend.
//!
//! Provides the [`QueryRunner`] seam used by the feed service and its HTTP
//! implementation, along with error handling for query execution.

mod client;
mod error;

pub use client::{ClientBuildError, QueryRunner, RunnerClient};
pub use error::RunnerError;
