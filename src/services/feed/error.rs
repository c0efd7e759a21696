use std::error::Error;
use std::fmt;

use log::error;

/// Client-input errors for the feed pipeline.
///
/// Backend failures never surface here; the feed service degrades them to
/// empty results by policy.
#[derive(Debug)]
pub enum FeedError {
	InvalidPaginationError(String),
}

impl FeedError {
	fn format_message(&self) -> String {
		match self {
			FeedError::InvalidPaginationError(msg) => {
				format!("Invalid pagination error: {}", msg)
			}
		}
	}

	pub fn invalid_pagination_error(msg: impl Into<String>) -> Self {
		let error = FeedError::InvalidPaginationError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for FeedError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for FeedError {}
