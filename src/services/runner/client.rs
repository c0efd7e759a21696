//! HTTP client for the remote query backend.
//!
//! Sends composed query text to the backend's run endpoint and decodes the
//! response into the typed payload. Supports:
//! - Authentication via bearer tokens
//! - Configurable request timeouts
//! - Bounded retry with exponential backoff for transient failures

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::{
	models::{BackendConfig, QueryResponse},
	services::runner::RunnerError,
	utils::{
		http::{create_retryable_http_client, HttpRetryConfig},
		RUN_QUERY_PATH,
	},
};

/// Errors raised while constructing the runner client
#[derive(Debug, Error)]
pub enum ClientBuildError {
	#[error("Failed to create HTTP client: {0}")]
	HttpClientBuildError(String),

	#[error("Invalid backend URL: {0}")]
	InvalidUrlError(String),
}

/// Executes composed queries against the remote backend.
///
/// Implementors are the seam between the feed service and the outside
/// world; tests substitute a mock to drive the pipeline without a network.
#[async_trait]
pub trait QueryRunner: Send + Sync {
	/// Runs a query with an optional bearer credential and returns the
	/// decoded response payload.
	async fn run_query(
		&self,
		query: String,
		authorization: Option<String>,
	) -> Result<QueryResponse, RunnerError>;
}

/// HTTP implementation of [`QueryRunner`] for the backend's run endpoint.
///
/// The client is thread-safe and can be shared across concurrent requests;
/// each request is independent and cancelled when its caller's future is
/// dropped.
#[derive(Clone, Debug)]
pub struct RunnerClient {
	client: ClientWithMiddleware,
	run_url: Url,
	backend: String,
}

impl RunnerClient {
	/// Creates a new runner client from validated backend configuration.
	pub fn new(config: &BackendConfig) -> Result<Self, ClientBuildError> {
		let base_url = Url::parse(&config.base_url)
			.map_err(|e| ClientBuildError::InvalidUrlError(e.to_string()))?;

		let mut run_url = base_url
			.join(RUN_QUERY_PATH)
			.map_err(|e| ClientBuildError::InvalidUrlError(e.to_string()))?;
		run_url
			.query_pairs_mut()
			.append_pair("backend", &config.backend);

		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_millis(config.request_timeout_ms))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.map_err(|e| ClientBuildError::HttpClientBuildError(e.to_string()))?;

		let client = create_retryable_http_client(&HttpRetryConfig::default(), http_client);

		Ok(Self {
			client,
			run_url,
			backend: config.backend.clone(),
		})
	}
}

#[async_trait]
impl QueryRunner for RunnerClient {
	/// Sends the query to the run endpoint.
	///
	/// The request carries `{query, backend}` as its JSON body and a bearer
	/// header when a credential is present. Non-success statuses become
	/// [`RunnerError::ResponseError`]; transport failures become
	/// [`RunnerError::ConnectionError`].
	#[instrument(skip(self, query, authorization), fields(backend = %self.backend))]
	async fn run_query(
		&self,
		query: String,
		authorization: Option<String>,
	) -> Result<QueryResponse, RunnerError> {
		let body = json!({
			"query": query,
			"backend": self.backend,
		});

		let mut request = self.client.post(self.run_url.clone()).json(&body);
		if let Some(token) = authorization {
			request = request.header(AUTHORIZATION, format!("Bearer {}", token));
		}

		let response = request
			.send()
			.await
			.map_err(|e| RunnerError::connection_error(e.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(RunnerError::response_error(status.as_u16(), body));
		}

		response
			.json::<QueryResponse>()
			.await
			.map_err(|e| RunnerError::parse_error(format!("Failed to decode query response: {}", e)))
	}
}
