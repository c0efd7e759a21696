//! Composition of the queries issued to the remote backend.
//!
//! A [`FeedQuery`] is an immutable value capturing the address set and
//! pagination window of one request; every query variant the engine needs is
//! rendered from it. All dynamic values pass through the literal layer in
//! [`super::sql`], never through ad hoc interpolation at call sites.

use crate::models::{AddressSet, PaginationWindow};

use super::sql;

/// Transaction columns projected by the feed query.
///
/// Enumerated explicitly because the final select aggregates events per
/// transaction and the grouping clause must list every projected column.
const TX_COLUMNS: [&str; 41] = [
	"tx_type",
	"block_time",
	"id",
	"tx_id",
	"tx_hash",
	"tx_index",
	"raw_result",
	"index_block_hash",
	"block_hash",
	"block_id",
	"block_height",
	"parent_block_hash",
	"burn_block_time",
	"parent_burn_block_time",
	"type_id",
	"anchor_mode",
	"status",
	"canonical",
	"post_conditions",
	"nonce",
	"fee_rate",
	"sponsored",
	"sponsor_address",
	"sender_address",
	"origin_hash_mode",
	"event_count",
	"microblock_canonical",
	"microblock_sequence",
	"microblock_hash",
	"parent_index_block_hash",
	"token_transfer_recipient_address",
	"token_transfer_amount",
	"token_transfer_memo",
	"smart_contract_contract_id",
	"smart_contract_source_code",
	"contract_call_contract_id",
	"contract_call_function_name",
	"contract_call_function_args",
	"poison_microblock_header_1",
	"poison_microblock_header_2",
	"coinbase_payload",
];

/// One of the three event tables unioned into the event universe.
///
/// The projections differ per table: the native table has no asset
/// identifier, and the non-fungible table carries its value column verbatim
/// while the others cast an amount to text.
struct EventSource {
	kind: &'static str,
	table: &'static str,
	asset_expr: &'static str,
	value_expr: &'static str,
}

const EVENT_SOURCES: [EventSource; 3] = [
	EventSource {
		kind: "FT",
		table: "FT_EVENTS",
		asset_expr: "asset_identifier",
		value_expr: "amount::text",
	},
	EventSource {
		kind: "NFT",
		table: "NFT_EVENTS",
		asset_expr: "asset_identifier",
		value_expr: "value",
	},
	EventSource {
		kind: "STX",
		table: "STX_EVENTS",
		asset_expr: "NULL",
		value_expr: "amount::text",
	},
];

/// An immutable feed query for one (addresses, window) pair.
///
/// Rendering is deterministic: the same query value always produces the same
/// text, which keeps anchor resolution stable across retries.
#[derive(Debug, Clone)]
pub struct FeedQuery {
	addresses: AddressSet,
	window: PaginationWindow,
}

impl FeedQuery {
	pub fn new(addresses: AddressSet, window: PaginationWindow) -> Self {
		Self { addresses, window }
	}

	/// Renders the unified query producing a page of transactions with their
	/// aggregated events.
	///
	/// The correlation set (`anchor_events`) is bounded below by the page
	/// anchor, strictly: events at exactly the anchor height are excluded,
	/// as they are already represented by the directly matched transaction
	/// at that height. Event attachment joins against the full
	/// address-matched universe (`address_events`) so that transactions at
	/// the anchor height still carry their events.
	pub fn render(&self) -> String {
		let address_list = self.address_list();
		let columns = projected_columns("txs");

		format!(
			r#"WITH page_anchor AS (
    SELECT block_height FROM (
        SELECT * FROM TRANSACTIONS
        WHERE sender_address IN ({address_list})
            OR token_transfer_recipient_address IN ({address_list})
        ORDER BY block_time DESC
        LIMIT {limit} OFFSET {offset}
    ) page
    ORDER BY block_height ASC
    LIMIT 1
),

address_events AS (
{events}
),

anchor_events AS (
    SELECT * FROM address_events
    WHERE block_height > (SELECT block_height FROM page_anchor)
),

page_txs AS (
    SELECT * FROM TRANSACTIONS
    WHERE sender_address IN ({address_list})
        OR token_transfer_recipient_address IN ({address_list})
        OR tx_hash IN (SELECT tx_hash FROM anchor_events)
    ORDER BY block_time DESC
    LIMIT {limit} OFFSET {offset}
)

SELECT
    {columns},
    json_agg(evts) AS events
FROM page_txs txs
LEFT JOIN address_events evts
    ON txs.tx_hash = evts.tx_hash
GROUP BY
    {columns}
ORDER BY txs.block_time DESC;"#,
			address_list = address_list,
			events = self.event_union(None),
			limit = self.window.limit,
			offset = self.window.offset,
			columns = columns,
		)
	}

	/// Renders the standalone anchor query.
	///
	/// The anchor is the minimum block height within the page slice of the
	/// address-matched transactions; an empty slice yields no row.
	pub fn render_anchor(&self) -> String {
		let address_list = self.address_list();

		format!(
			r#"SELECT block_height FROM (
    SELECT * FROM TRANSACTIONS
    WHERE sender_address IN ({address_list})
        OR token_transfer_recipient_address IN ({address_list})
    ORDER BY block_time DESC
    LIMIT {limit} OFFSET {offset}
) page
ORDER BY block_height ASC
LIMIT 1;"#,
			address_list = address_list,
			limit = self.window.limit,
			offset = self.window.offset,
		)
	}

	/// Renders the event query across the three variants.
	///
	/// With `since_block` set, only events strictly above that height are
	/// selected; without it, the query covers the full address-matched
	/// event universe.
	pub fn render_events(&self, since_block: Option<u64>) -> String {
		format!("{};", self.event_union(since_block))
	}

	/// Renders the transaction page query of the two-phase path.
	///
	/// `extra_tx_hashes` widens the match to transactions pulled in through
	/// event correlation; when empty, the arm is omitted entirely.
	pub fn render_transactions(&self, extra_tx_hashes: &[String]) -> String {
		let address_list = self.address_list();

		let hash_arm = if extra_tx_hashes.is_empty() {
			String::new()
		} else {
			format!(
				"\n    OR tx_hash IN ({})",
				sql::literal_list(extra_tx_hashes.iter().map(String::as_str))
			)
		};

		format!(
			r#"SELECT * FROM TRANSACTIONS
WHERE sender_address IN ({address_list})
    OR token_transfer_recipient_address IN ({address_list}){hash_arm}
ORDER BY block_time DESC
LIMIT {limit} OFFSET {offset};"#,
			address_list = address_list,
			hash_arm = hash_arm,
			limit = self.window.limit,
			offset = self.window.offset,
		)
	}

	fn address_list(&self) -> String {
		sql::literal_list(self.addresses.iter())
	}

	/// The three-branch union over the event tables.
	fn event_union(&self, since_block: Option<u64>) -> String {
		let address_list = self.address_list();
		let height_clause = match since_block {
			Some(height) => format!(" AND block_height > {}", height),
			None => String::new(),
		};

		EVENT_SOURCES
			.iter()
			.map(|source| {
				format!(
					"    SELECT {kind} AS event_type, block_height, {asset} AS asset_identifier, \
					 tx_hash, asset_event_type, sender, recipient, {value} AS value\n    \
					 FROM {table}\n    \
					 WHERE (recipient IN ({address_list}) OR sender IN ({address_list})){height_clause}",
					kind = sql::quote_literal(source.kind),
					asset = source.asset_expr,
					value = source.value_expr,
					table = source.table,
					address_list = address_list,
					height_clause = height_clause,
				)
			})
			.collect::<Vec<_>>()
			.join("\n\n    UNION ALL\n\n")
	}
}

/// Projects every transaction column under the given alias.
fn projected_columns(alias: &str) -> String {
	TX_COLUMNS
		.iter()
		.map(|column| format!("{}.{}", alias, column))
		.collect::<Vec<_>>()
		.join(",\n    ")
}

/// Renders the token metadata lookup for the given contract identifiers.
pub fn token_properties_query(contract_ids: &[String]) -> String {
	format!(
		"SELECT *\nFROM TOKEN_PROPERTIES\nWHERE contract_id IN ({});",
		sql::literal_list(contract_ids.iter().map(String::as_str))
	)
}
