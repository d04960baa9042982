//! Page template module
//!
//! Loads template files and substitutes the fixed `{{token}}` placeholders
//! with request data. Substitution is first-occurrence-only: a template
//! that repeats a placeholder keeps every occurrence after the first
//! verbatim.

use std::collections::BTreeMap;
use tokio::fs;

/// Placeholders recognized by the information template.
pub const METHOD_PLACEHOLDER: &str = "{{method}}";
pub const PATH_PLACEHOLDER: &str = "{{path}}";
pub const QUERY_PLACEHOLDER: &str = "{{query}}";

/// Load a template file as UTF-8 text.
pub async fn load(path: &str) -> std::io::Result<String> {
    fs::read_to_string(path).await
}

/// Render the information template.
///
/// Replaces the first occurrence of each placeholder: `{{method}}` with
/// the literal method, `{{path}}` with the literal path, and `{{query}}`
/// with the sanitized query mapping serialized as a JSON object. A
/// placeholder absent from the template simply passes through.
#[must_use]
pub fn render_information(
    template: &str,
    method: &str,
    path: &str,
    query: &BTreeMap<String, String>,
) -> String {
    template
        .replacen(METHOD_PLACEHOLDER, method, 1)
        .replacen(PATH_PLACEHOLDER, path, 1)
        .replacen(QUERY_PLACEHOLDER, &query_to_json(query), 1)
}

/// Serialize the query mapping as a JSON object with string values.
fn query_to_json(query: &BTreeMap<String, String>) -> String {
    serde_json::to_string(query).unwrap_or_else(|_| String::from("{}"))
}
