//! Feed aggregation entry point.
//!
//! This binary runs one feed query against the configured backend: it
//! normalizes the supplied addresses, resolves the requested page window,
//! executes the unified feed query, and prints the resulting page as JSON.
//!
//! # Flow
//! 1. Loads backend configuration from the environment
//! 2. Normalizes addresses and validates the pagination offset
//! 3. Builds the runner client and feed service
//! 4. Prints the feed page (or just the page anchor with `--anchor-only`)

use clap::{Arg, Command};
use dotenvy::dotenv;
use tracing::{error, info};

use stacks_feed::{
	models::{AddressSet, BackendConfig},
	services::{
		feed::{self, FeedService},
		runner::RunnerClient,
	},
	utils::logging::setup_logging,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
	// Initialize command-line interface
	let matches = Command::new("stacks-feed")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"A feed aggregation engine that assembles a paginated, event-annotated activity \
			 feed for a set of Stacks addresses by querying a remote chain-data backend.",
		)
		.arg(
			Arg::new("address")
				.long("address")
				.short('a')
				.help("Address to include in the feed (repeatable)")
				.value_name("ADDRESS")
				.action(clap::ArgAction::Append)
				.required(true),
		)
		.arg(
			Arg::new("offset")
				.long("offset")
				.help("Pagination offset; rows to skip in the time-ordered feed")
				.value_name("OFFSET"),
		)
		.arg(
			Arg::new("auth-token")
				.long("auth-token")
				.help("Bearer credential for the query backend (overrides the environment)")
				.value_name("TOKEN"),
		)
		.arg(
			Arg::new("anchor-only")
				.long("anchor-only")
				.help("Resolve and print the page anchor block height instead of the feed")
				.action(clap::ArgAction::SetTrue),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Setup logging to stdout
	setup_logging().unwrap_or_else(|e| {
		error!("Failed to setup logging: {}", e);
	});

	let config = BackendConfig::from_env()
		.map_err(|e| anyhow::anyhow!("Failed to load backend configuration: {}", e))?;

	let addresses: Vec<String> = matches
		.get_many::<String>("address")
		.map(|values| values.cloned().collect())
		.unwrap_or_default();
	let addresses = AddressSet::new(addresses);

	let window = feed::parse_window(matches.get_one::<String>("offset").map(String::as_str))?;

	let auth_token = matches
		.get_one::<String>("auth-token")
		.cloned()
		.or_else(|| config.auth_token.clone());

	let client = RunnerClient::new(&config)?;
	let service = FeedService::new(client);

	if matches.get_flag("anchor-only") {
		match service
			.resolve_anchor(&addresses, window, auth_token.as_deref())
			.await
		{
			Some(anchor) => println!("{}", anchor),
			None => info!("No page exists at this offset"),
		}
		return Ok(());
	}

	let page = service
		.get_feed_page(&addresses, window, auth_token.as_deref())
		.await;

	info!(entries = page.len(), "Feed page assembled");
	println!("{}", serde_json::to_string_pretty(&page)?);

	Ok(())
}
