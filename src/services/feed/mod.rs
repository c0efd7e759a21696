//! Feed aggregation over the remote chain-data backend.
//!
//! Implements the core pipeline: normalize addresses, compose the anchored
//! feed query, execute it through a [`QueryRunner`], reshape the columnar
//! response, and decode the page. Also exposes the granular operations of
//! the two-phase path (anchor resolution, event and transaction fetches,
//! client-side merge) and the token metadata lookup.

mod error;
mod query;
pub mod sql;

pub use error::FeedError;
pub use query::{token_properties_query, FeedQuery};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{instrument, warn};

use crate::{
	models::{
		AddressSet, Event, FeedEntry, FeedPage, PaginationWindow, TokenProperties, Transaction,
	},
	services::runner::QueryRunner,
};

/// Parses a caller-supplied offset parameter into a pagination window.
///
/// Rejected input never reaches query composition.
pub fn parse_window(raw_offset: Option<&str>) -> Result<PaginationWindow, FeedError> {
	PaginationWindow::from_offset_param(raw_offset).map_err(FeedError::invalid_pagination_error)
}

/// Aggregates paginated activity feeds for address sets.
///
/// Generic over the query runner so tests can drive the pipeline without a
/// network. Each request is an independent, linear pipeline; the service
/// holds no state beyond the runner.
pub struct FeedService<T: QueryRunner> {
	runner: T,
}

impl<T: QueryRunner> FeedService<T> {
	pub fn new(runner: T) -> Self {
		Self { runner }
	}

	/// Produces one feed page with the unified single-query path.
	///
	/// An empty address set short-circuits to an empty page without touching
	/// the backend. Backend failures degrade to an empty page per the
	/// empty-result policy; callers never observe an error.
	#[instrument(skip_all, fields(addresses = addresses.len(), offset = window.offset))]
	pub async fn get_feed_page(
		&self,
		addresses: &AddressSet,
		window: PaginationWindow,
		authorization: Option<&str>,
	) -> FeedPage {
		if addresses.is_empty() {
			return FeedPage::default();
		}

		let query = FeedQuery::new(addresses.clone(), window).render();
		let rows = self.run_or_empty(query, authorization).await;

		FeedPage {
			entries: decode_rows(rows),
		}
	}

	/// Resolves the anchor block height for the given page.
	///
	/// Returns `None` when no page exists at this offset, or when the
	/// backend fails.
	#[instrument(skip_all, fields(addresses = addresses.len(), offset = window.offset))]
	pub async fn resolve_anchor(
		&self,
		addresses: &AddressSet,
		window: PaginationWindow,
		authorization: Option<&str>,
	) -> Option<u64> {
		if addresses.is_empty() {
			return None;
		}

		let query = FeedQuery::new(addresses.clone(), window).render_anchor();
		let rows = self.run_or_empty(query, authorization).await;

		rows.first()
			.and_then(|row| row.get("block_height"))
			.and_then(Value::as_u64)
	}

	/// Fetches address-matched events across the three variants.
	///
	/// With `since_block` set, only events strictly above that height are
	/// returned; without it, the full event universe for the address set.
	pub async fn fetch_events(
		&self,
		addresses: &AddressSet,
		since_block: Option<u64>,
		authorization: Option<&str>,
	) -> Vec<Event> {
		if addresses.is_empty() {
			return Vec::new();
		}

		let query =
			FeedQuery::new(addresses.clone(), PaginationWindow::default()).render_events(since_block);
		let rows = self.run_or_empty(query, authorization).await;

		decode_rows(rows)
	}

	/// Fetches the transaction page of the two-phase path.
	///
	/// `extra_tx_hashes` carries the hashes of event-correlated transactions
	/// so they compete for page slots alongside directly matched ones.
	pub async fn fetch_transactions(
		&self,
		addresses: &AddressSet,
		window: PaginationWindow,
		extra_tx_hashes: &[String],
		authorization: Option<&str>,
	) -> Vec<Transaction> {
		if addresses.is_empty() {
			return Vec::new();
		}

		let query = FeedQuery::new(addresses.clone(), window).render_transactions(extra_tx_hashes);
		let rows = self.run_or_empty(query, authorization).await;

		decode_rows(rows)
	}

	/// Fetches token metadata for the given contract identifiers.
	pub async fn fetch_token_properties(
		&self,
		contract_ids: &[String],
		authorization: Option<&str>,
	) -> Vec<TokenProperties> {
		if contract_ids.is_empty() {
			return Vec::new();
		}

		let query = token_properties_query(contract_ids);
		let rows = self.run_or_empty(query, authorization).await;

		decode_rows(rows)
	}

	/// The empty-result policy: every runner failure becomes an empty row
	/// set, logged but never propagated. Callers cannot distinguish a failed
	/// backend from an empty result; preserved for behavioral compatibility
	/// with the service this engine replaces.
	async fn run_or_empty(
		&self,
		query: String,
		authorization: Option<&str>,
	) -> Vec<Map<String, Value>> {
		match self
			.runner
			.run_query(query, authorization.map(String::from))
			.await
		{
			Ok(response) => response.into_rows(),
			Err(e) => {
				warn!("Query execution failed, degrading to empty result: {}", e);
				Vec::new()
			}
		}
	}
}

/// Attaches events to transactions by hash, client-side.
///
/// The merge counterpart of the unified query's left-join aggregate: a
/// transaction with no matching events gets an empty list.
pub fn merge_events(transactions: Vec<Transaction>, events: &[Event]) -> FeedPage {
	let entries = transactions
		.into_iter()
		.map(|transaction| {
			let events = events
				.iter()
				.filter(|event| event.tx_hash == transaction.tx_hash)
				.cloned()
				.collect();
			FeedEntry {
				transaction,
				events,
			}
		})
		.collect();

	FeedPage { entries }
}

/// Decodes reshaped rows into typed records, skipping rows that do not fit.
fn decode_rows<D: DeserializeOwned>(rows: Vec<Map<String, Value>>) -> Vec<D> {
	rows.into_iter()
		.filter_map(|row| match serde_json::from_value(Value::Object(row)) {
			Ok(record) => Some(record),
			Err(e) => {
				warn!("Skipping row that failed to decode: {}", e);
				None
			}
		})
		.collect()
}
