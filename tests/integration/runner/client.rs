use mockito::{Matcher, Server};
use serde_json::json;

use stacks_feed::{
	models::{BackendConfig, QueryResponse},
	services::runner::{QueryRunner, RunnerClient, RunnerError},
};

fn config_for(server: &Server) -> BackendConfig {
	BackendConfig {
		base_url: server.url(),
		backend: "stacks".to_string(),
		request_timeout_ms: 5_000,
		auth_token: None,
	}
}

#[tokio::test]
async fn test_run_query_posts_body_and_bearer_header() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/v3/run")
		.match_query(Matcher::UrlEncoded("backend".into(), "stacks".into()))
		.match_header("authorization", "Bearer secret")
		.match_body(Matcher::Json(json!({
			"query": "SELECT 1;",
			"backend": "stacks"
		})))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			json!({
				"order": ["a"],
				"columns": { "a": [1] }
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = RunnerClient::new(&config_for(&server)).unwrap();
	let response = client
		.run_query("SELECT 1;".to_string(), Some("secret".to_string()))
		.await
		.unwrap();

	let rows = response.into_rows();
	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0]["a"], json!(1));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_run_query_without_credential_omits_header() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/v3/run")
		.match_query(Matcher::UrlEncoded("backend".into(), "stacks".into()))
		.match_header("authorization", Matcher::Missing)
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(json!([]).to_string())
		.create_async()
		.await;

	let client = RunnerClient::new(&config_for(&server)).unwrap();
	let response = client.run_query("SELECT 1;".to_string(), None).await.unwrap();

	assert_eq!(response, QueryResponse::Rows(json!([])));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_run_query_non_success_status_is_a_response_error() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/v3/run")
		.match_query(Matcher::UrlEncoded("backend".into(), "stacks".into()))
		.with_status(404)
		.with_body("no such backend")
		.create_async()
		.await;

	let client = RunnerClient::new(&config_for(&server)).unwrap();
	let result = client.run_query("SELECT 1;".to_string(), None).await;

	match result.unwrap_err() {
		RunnerError::ResponseError(status, body) => {
			assert_eq!(status, 404);
			assert!(body.contains("no such backend"));
		}
		err => panic!("Expected ResponseError, got {:?}", err),
	}
	mock.assert_async().await;
}

#[tokio::test]
async fn test_run_query_unparseable_body_is_a_parse_error() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/v3/run")
		.match_query(Matcher::UrlEncoded("backend".into(), "stacks".into()))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body("not json at all")
		.create_async()
		.await;

	let client = RunnerClient::new(&config_for(&server)).unwrap();
	let result = client.run_query("SELECT 1;".to_string(), None).await;

	match result.unwrap_err() {
		RunnerError::ParseError(msg) => {
			assert!(msg.contains("Failed to decode query response"));
		}
		err => panic!("Expected ParseError, got {:?}", err),
	}
	mock.assert_async().await;
}

#[tokio::test]
async fn test_run_query_scalar_payload_carries_no_rows() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/v3/run")
		.match_query(Matcher::UrlEncoded("backend".into(), "stacks".into()))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body("42")
		.create_async()
		.await;

	let client = RunnerClient::new(&config_for(&server)).unwrap();
	let response = client.run_query("SELECT 1;".to_string(), None).await.unwrap();

	assert!(response.into_rows().is_empty());
}
