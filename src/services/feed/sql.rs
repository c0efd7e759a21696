//! Literal rendering for composed query text.
//!
//! Every dynamic value embedded in a query passes through this module;
//! escaping lives here and nowhere else. Addresses and hashes are rendered
//! as single-quoted literals with embedded quotes doubled, so no input can
//! terminate its own literal.

/// Renders a string as a single-quoted literal.
pub fn quote_literal(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('\'');
	for ch in value.chars() {
		if ch == '\'' {
			out.push('\'');
		}
		out.push(ch);
	}
	out.push('\'');
	out
}

/// Renders a sequence of strings as a comma-separated list of quoted
/// literals, suitable for an `IN (...)` predicate.
pub fn literal_list<'a, I>(values: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	values
		.into_iter()
		.map(quote_literal)
		.collect::<Vec<_>>()
		.join(", ")
}
