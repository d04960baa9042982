//! Query string parsing and validation module
//!
//! Turns the raw query portion of a URL into a key/value mapping and
//! checks the blank-parameter invariant before any handler touches it.

use std::collections::BTreeMap;
use url::form_urlencoded;

/// Parse a raw query string into a key/value mapping.
///
/// Percent-encoding is decoded and `+` becomes a space. Duplicate keys
/// collapse to the last value seen.
#[must_use]
pub fn parse(raw: Option<&str>) -> BTreeMap<String, String> {
    form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

/// Check the query mapping invariant: every key and every value must be
/// non-empty after trimming whitespace. An empty mapping is valid.
#[must_use]
pub fn is_valid(query: &BTreeMap<String, String>) -> bool {
    query
        .iter()
        .all(|(key, value)| !key.trim().is_empty() && !value.trim().is_empty())
}
