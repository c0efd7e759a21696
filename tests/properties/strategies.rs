//! Shared proptest strategies.

use proptest::prelude::*;
use serde_json::Value;

/// Address-like strings, with quote characters included often enough to
/// exercise the escaping path.
pub fn arb_address() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z0-9.']{1,40}").unwrap()
}

/// Scalar JSON values for columnar cells.
pub fn arb_cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9]{0,12}".prop_map(Value::from),
    ]
}

/// Column names that never collide with the reshaper's shape probe fields.
pub fn arb_column_name() -> impl Strategy<Value = String> {
    "[a-n]{1,8}".prop_filter("reserved", |name| name != "order" && name != "columns")
}
