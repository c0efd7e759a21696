//! Backend configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::env;

use crate::utils::{
	AUTH_TOKEN_ENV, BACKEND_URL_ENV, DEFAULT_BACKEND, DEFAULT_REQUEST_TIMEOUT_MS,
	REQUEST_TIMEOUT_ENV,
};

mod error;

pub use error::ConfigError;

/// Connection settings for the remote query backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
	/// Base URL of the query service
	pub base_url: String,
	/// Query engine identifier sent with every request
	pub backend: String,
	/// Per-request timeout in milliseconds
	pub request_timeout_ms: u64,
	/// Default bearer credential, overridable per request
	pub auth_token: Option<String>,
}

impl BackendConfig {
	/// Loads and validates the configuration from the environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		let base_url = env::var(BACKEND_URL_ENV).map_err(|_| {
			ConfigError::missing_var_error(format!(
				"env variable '{}' is missing",
				BACKEND_URL_ENV
			))
		})?;

		let request_timeout_ms = env::var(REQUEST_TIMEOUT_ENV)
			.ok()
			.and_then(|value| value.parse().ok())
			.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

		let config = Self {
			base_url,
			backend: DEFAULT_BACKEND.to_string(),
			request_timeout_ms,
			auth_token: env::var(AUTH_TOKEN_ENV).ok(),
		};

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	pub fn validate(&self) -> Result<(), String> {
		if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
			return Err("Backend URL must start with http:// or https://".to_string());
		}

		if self.backend.is_empty() {
			return Err("Backend identifier must not be empty".to_string());
		}

		if self.request_timeout_ms == 0 {
			return Err("Request timeout must be greater than 0".to_string());
		}

		Ok(())
	}
}
