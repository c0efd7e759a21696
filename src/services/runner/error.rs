//! Query runner error types and handling.
//!
//! Errors raised while executing composed queries against the remote
//! backend. The runner reports failures faithfully; downgrading them to
//! empty results is the feed service's decision, not this module's.

use log::error;

/// Represents possible errors that can occur during query execution
#[derive(Debug)]
pub enum RunnerError {
	/// Errors related to network connectivity issues
	ConnectionError(String),

	/// Errors related to malformed requests
	RequestError(String),

	/// A non-success status returned by the backend
	///
	/// Contains the HTTP status code and the response body
	ResponseError(u16, String),

	/// Errors related to decoding the backend response
	ParseError(String),
}

impl RunnerError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::ResponseError(status, body) => {
				format!("Response error: status {}: {}", status, body)
			}
			Self::ParseError(msg) => format!("Parse error: {}", msg),
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new response error with logging
	pub fn response_error(status: u16, body: impl Into<String>) -> Self {
		let error = Self::ResponseError(status, body.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new parse error with logging
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for RunnerError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for RunnerError {}
