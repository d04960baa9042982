//! XSS sanitization module
//!
//! Pure string encoders that turn untrusted query input into HTML-safe
//! text. Two passes are applied to every rendered value: entity encoding
//! first, attribute encoding second.

/// Encode HTML entities in untrusted input.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their named or hex entities.
/// `&` must be replaced first so the entities inserted by the later
/// replacements are not themselves re-encoded.
///
/// # Examples
/// ```
/// use staticd::sanitize::encode_html_entities;
/// assert_eq!(encode_html_entities("<script>"), "&lt;script&gt;");
/// ```
#[must_use]
pub fn encode_html_entities(unsafe_input: &str) -> String {
    unsafe_input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Encode a string for use in an HTML attribute context.
///
/// Works per Unicode code point: ASCII digits and letters pass through,
/// every other character becomes `&#xHH;` with the code point in
/// uppercase hex.
///
/// # Examples
/// ```
/// use staticd::sanitize::encode_html_attributes;
/// assert_eq!(encode_html_attributes("a b"), "a&#x20;b");
/// ```
#[must_use]
pub fn encode_html_attributes(unsafe_input: &str) -> String {
    let mut encoded = String::with_capacity(unsafe_input.len());
    for ch in unsafe_input.chars() {
        match ch {
            '0'..='9' | 'A'..='Z' | 'a'..='z' => encoded.push(ch),
            other => {
                encoded.push_str(&format!("&#x{:X};", other as u32));
            }
        }
    }
    encoded
}
