use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use serde_json::{Map, Value};

use stacks_feed::models::{ColumnarPayload, QueryResponse};

use crate::properties::strategies::{arb_cell, arb_column_name};

/// Builds an equal-length column table from a pool of cells.
fn build_columns(
	names: &[String],
	length: usize,
	cells: &[Value],
) -> HashMap<String, Vec<Value>> {
	names
		.iter()
		.enumerate()
		.map(|(c, name)| {
			let values = (0..length)
				.map(|r| {
					if cells.is_empty() {
						Value::Null
					} else {
						cells[(r + c) % cells.len()].clone()
					}
				})
				.collect();
			(name.clone(), values)
		})
		.collect()
}

proptest! {
	/// The transposed row count always equals the first column's length.
	#[test]
	fn transposed_row_count_matches_first_column(
		name_set in prop::collection::hash_set(arb_column_name(), 1..5),
		length in 0usize..8,
		cells in prop::collection::vec(arb_cell(), 0..32),
	) {
		let names: Vec<String> = name_set.into_iter().collect();
		let payload = ColumnarPayload {
			order: names.clone(),
			columns: build_columns(&names, length, &cells),
		};

		let rows = payload.into_rows();
		prop_assert_eq!(rows.len(), length);
	}

	/// Every transposed row carries exactly the ordered column names as keys.
	#[test]
	fn transposed_rows_carry_every_ordered_column(
		name_set in prop::collection::hash_set(arb_column_name(), 1..5),
		length in 1usize..8,
		cells in prop::collection::vec(arb_cell(), 0..32),
	) {
		let names: Vec<String> = name_set.into_iter().collect();
		let payload = ColumnarPayload {
			order: names.clone(),
			columns: build_columns(&names, length, &cells),
		};

		let expected: HashSet<&String> = names.iter().collect();
		for row in payload.into_rows() {
			let keys: HashSet<&String> = row.keys().collect();
			prop_assert_eq!(&keys, &expected);
		}
	}

	/// Cells survive transposition at their row/column coordinates.
	#[test]
	fn transposition_preserves_cell_values(
		name_set in prop::collection::hash_set(arb_column_name(), 1..4),
		length in 1usize..6,
		cells in prop::collection::vec(arb_cell(), 1..32),
	) {
		let names: Vec<String> = name_set.into_iter().collect();
		let columns = build_columns(&names, length, &cells);
		let payload = ColumnarPayload {
			order: names.clone(),
			columns: columns.clone(),
		};

		let rows = payload.into_rows();
		for (r, row) in rows.iter().enumerate() {
			for name in &names {
				prop_assert_eq!(&row[name], &columns[name][r]);
			}
		}
	}

	/// Objects without the columnar shape decode as an untouched row payload.
	#[test]
	fn non_columnar_objects_pass_through_unchanged(
		entries in prop::collection::vec((arb_column_name(), arb_cell()), 0..6),
	) {
		let mut object = Map::new();
		for (key, value) in entries {
			object.insert(key, value);
		}
		let payload = Value::Object(object);

		let response: QueryResponse = serde_json::from_value(payload.clone()).unwrap();
		prop_assert_eq!(response, QueryResponse::Rows(payload));
	}
}
