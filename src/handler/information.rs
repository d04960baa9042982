//! Information page handler
//!
//! Renders the information template from the request's query parameters.
//! GET only; every query value is sanitized (entity encoding, then
//! attribute encoding) before it reaches the template.

use crate::http::{self, query, ResponseBody};
use crate::logger;
use crate::sanitize;
use crate::template;
use hyper::{Method, Response};

/// Handle a request for `/information`.
///
/// Validates the query mapping before any filesystem access: a blank key
/// or value (after trimming) rejects the whole request with 400.
pub async fn handle(
    method: &Method,
    raw_query: Option<&str>,
    template_path: &str,
) -> Response<ResponseBody> {
    if *method != Method::GET {
        return http::build_405_response();
    }

    let mut params = query::parse(raw_query);
    if !query::is_valid(&params) {
        return http::build_400_response();
    }

    let page_template = match template::load(template_path).await {
        Ok(t) => t,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read template '{template_path}': {e}"
            ));
            return http::build_500_response();
        }
    };

    // Entity encoding first, attribute encoding second
    for value in params.values_mut() {
        let entity_encoded = sanitize::encode_html_entities(value);
        *value = sanitize::encode_html_attributes(&entity_encoded);
    }

    let page = template::render_information(&page_template, "GET", "/information", &params);
    http::build_html_response(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::io::Write;

    async fn body_string(resp: Response<ResponseBody>) -> String {
        let collected = resp.into_body().collect().await.unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    fn template_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_non_get_method_is_405() {
        let resp = handle(&Method::POST, Some("a=1"), "unused.html").await;
        assert_eq!(resp.status(), 405);
        assert_eq!(body_string(resp).await, "Method Not Allowed");
    }

    #[tokio::test]
    async fn test_blank_parameter_is_400_before_template_read() {
        // The template path does not exist; a 500 here would mean the
        // filesystem was touched before validation.
        let resp = handle(&Method::GET, Some("a=1&b="), "does-not-exist.html").await;
        assert_eq!(resp.status(), 400);
        assert_eq!(
            body_string(resp).await,
            "Bad Request: Invalid query parameters"
        );
    }

    #[tokio::test]
    async fn test_missing_template_is_500() {
        let resp = handle(&Method::GET, Some("a=1"), "does-not-exist.html").await;
        assert_eq!(resp.status(), 500);
        assert_eq!(body_string(resp).await, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_valid_query_renders_sanitized_values() {
        let file = template_file("{{method}} {{path}} {{query}}");
        let resp = handle(
            &Method::GET,
            Some("name=alice&note=a+b"),
            file.path().to_str().unwrap(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["Content-Type"].to_str().unwrap(),
            "text/html"
        );
        let body = body_string(resp).await;
        // Space survives entity encoding but not attribute encoding
        assert_eq!(
            body,
            "GET /information {\"name\":\"alice\",\"note\":\"a&#x20;b\"}"
        );
    }

    #[tokio::test]
    async fn test_script_injection_is_neutralized() {
        let file = template_file("{{query}}");
        let resp = handle(
            &Method::GET,
            Some("q=%3Cscript%3E"),
            file.path().to_str().unwrap(),
        )
        .await;
        let body = body_string(resp).await;
        assert!(!body.contains('<'));
        // Entity pass produced &lt;script&gt;, attribute pass re-encoded
        // its non-alphanumerics
        assert!(body.contains("&#x26;lt&#x3B;script&#x26;gt&#x3B;"));
    }

    #[tokio::test]
    async fn test_no_query_renders_empty_object() {
        let file = template_file("{{query}}");
        let resp = handle(&Method::GET, None, file.path().to_str().unwrap()).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_string(resp).await, "{}");
    }
}
