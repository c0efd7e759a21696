//! Utility modules for common functionality.
//!
//! - constants: Constants for the application
//! - http: Retryable HTTP client construction
//! - logging: Logging utilities

pub mod constants;
pub mod http;
pub mod logging;

pub use constants::*;
