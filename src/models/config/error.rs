//! Configuration error types.
//!
//! Errors raised while reading and validating backend configuration from the
//! environment.

use log::error;
use std::{error::Error, fmt};

/// Errors that can occur during configuration loading
#[derive(Debug)]
pub enum ConfigError {
	/// A required environment variable is not set
	MissingVarError(String),

	/// Configuration validation failed
	ValidationError(String),
}

impl ConfigError {
	/// Format the error message for display
	fn format_message(&self) -> String {
		match self {
			Self::MissingVarError(msg) => format!("Missing variable error: {}", msg),
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
		}
	}

	/// Create a new missing variable error and log it
	pub fn missing_var_error(msg: impl Into<String>) -> Self {
		let error = Self::MissingVarError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new validation error and log it
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}
