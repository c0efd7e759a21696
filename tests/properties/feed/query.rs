use proptest::prelude::*;

use stacks_feed::{
	models::{AddressSet, PaginationWindow},
	services::feed::{sql, FeedQuery},
};

use crate::properties::strategies::arb_address;

proptest! {
	/// No input can terminate its own quoted literal: stripping the outer
	/// quotes and collapsing doubled quotes leaves no quote behind.
	#[test]
	fn quoted_literals_cannot_be_escaped(address in arb_address()) {
		let literal = sql::quote_literal(&address);

		prop_assert!(literal.starts_with('\''));
		prop_assert!(literal.ends_with('\''));

		let inner = &literal[1..literal.len() - 1];
		prop_assert!(!inner.replace("''", "").contains('\''));
	}

	/// Quoting round-trips the address content via quote doubling.
	#[test]
	fn quoting_is_reversible(address in arb_address()) {
		let literal = sql::quote_literal(&address);
		let inner = &literal[1..literal.len() - 1];
		prop_assert_eq!(inner.replace("''", "'"), address);
	}

	/// The unified query is bounded by the fixed limit and the caller's
	/// offset, whatever the address material looks like.
	#[test]
	fn feed_query_carries_the_window_bounds(
		addresses in prop::collection::vec(arb_address(), 1..5),
		offset in 0u64..10_000,
	) {
		let query = FeedQuery::new(
			AddressSet::new(addresses),
			PaginationWindow::with_offset(offset),
		)
		.render();

		let bound = format!("LIMIT {} OFFSET {}", PaginationWindow::LIMIT, offset);
		prop_assert!(query.contains(&bound));
	}

	/// Rendering is deterministic: the same inputs yield identical text.
	#[test]
	fn feed_query_rendering_is_deterministic(
		addresses in prop::collection::vec(arb_address(), 1..5),
		offset in 0u64..10_000,
	) {
		let a = FeedQuery::new(
			AddressSet::new(addresses.clone()),
			PaginationWindow::with_offset(offset),
		);
		let b = FeedQuery::new(
			AddressSet::new(addresses),
			PaginationWindow::with_offset(offset),
		);

		prop_assert_eq!(a.render(), b.render());
		prop_assert_eq!(a.render_anchor(), b.render_anchor());
	}

	/// Offset strings round-trip through window parsing.
	#[test]
	fn offset_parsing_round_trips(offset in any::<u64>()) {
		let window = PaginationWindow::from_offset_param(Some(&offset.to_string())).unwrap();
		prop_assert_eq!(window.offset, offset);
		prop_assert_eq!(window.limit, PaginationWindow::LIMIT);
	}

	/// Strings with any non-digit character never parse as offsets.
	#[test]
	fn non_numeric_offsets_are_rejected(raw in "[a-z!@# ]{1,10}") {
		prop_assert!(PaginationWindow::from_offset_param(Some(&raw)).is_err());
	}
}
