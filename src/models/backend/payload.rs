//! Typed decoding of query backend response payloads.
//!
//! The backend answers either with a columnar table ({order, columns}) that
//! must be transposed into row records, or with data that is already
//! row-oriented. The shape is decided once, at decode time, so downstream
//! code never probes fields at runtime.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// A table expressed as a list of column names plus one value array per column.
///
/// All value arrays are the same length; that is a contract of the backend
/// and is not re-validated here. Missing cells transpose to JSON null rather
/// than aborting the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnarPayload {
	pub order: Vec<String>,
	pub columns: HashMap<String, Vec<Value>>,
}

impl ColumnarPayload {
	/// Transposes the payload into one record per row.
	///
	/// The row count is the length of the first column named in `order`; an
	/// empty `order`, or a first column that is absent or empty, yields no
	/// rows. Each record maps every name in `order` to that column's value at
	/// the row index.
	pub fn into_rows(self) -> Vec<Map<String, Value>> {
		let first = match self.order.first() {
			Some(name) => name,
			None => return Vec::new(),
		};
		let length = self.columns.get(first).map(Vec::len).unwrap_or(0);

		let mut rows = Vec::with_capacity(length);
		for r in 0..length {
			let mut row = Map::new();
			for name in &self.order {
				let cell = self
					.columns
					.get(name)
					.and_then(|values| values.get(r))
					.cloned()
					.unwrap_or(Value::Null);
				row.insert(name.clone(), cell);
			}
			rows.push(row);
		}
		rows
	}
}

/// A decoded backend response.
///
/// A payload carrying both `order` and `columns` is columnar; anything else
/// passes through unchanged as row-oriented data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryResponse {
	Columnar(ColumnarPayload),
	Rows(Value),
}

impl QueryResponse {
	/// Converts the response into row records.
	///
	/// Columnar payloads are transposed; row payloads keep their object
	/// elements as-is. Non-array row payloads and non-object elements carry
	/// no rows.
	pub fn into_rows(self) -> Vec<Map<String, Value>> {
		match self {
			Self::Columnar(payload) => payload.into_rows(),
			Self::Rows(Value::Array(items)) => items
				.into_iter()
				.filter_map(|item| match item {
					Value::Object(row) => Some(row),
					_ => None,
				})
				.collect(),
			Self::Rows(_) => Vec::new(),
		}
	}
}
