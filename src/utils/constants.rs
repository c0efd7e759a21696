//! Constants for the application.

/// Path of the query execution endpoint on the backend service.
pub const RUN_QUERY_PATH: &str = "v3/run";

/// Query engine identifier sent with every backend request.
pub const DEFAULT_BACKEND: &str = "stacks";

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_ENV: &str = "STACKS_QUERY_URL";

/// Environment variable naming the default bearer credential.
pub const AUTH_TOKEN_ENV: &str = "STACKS_QUERY_AUTH_TOKEN";

/// Environment variable overriding the backend request timeout (milliseconds).
pub const REQUEST_TIMEOUT_ENV: &str = "STACKS_QUERY_TIMEOUT_MS";

/// Default timeout for backend requests.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
