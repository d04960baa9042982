//! HTTP response building module
//!
//! Provides builders for the status code responses the server emits,
//! decoupled from specific business logic. All responses share a boxed
//! body type so fixed strings and streamed files go through the same
//! service signature.

use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Response;

/// Body type shared by every response: either a buffered `Full` body or
/// a streamed file body.
pub type ResponseBody = BoxBody<Bytes, std::io::Error>;

/// Wrap a fixed payload in the shared body type.
pub fn full_body(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed()
}

/// Build 400 Bad Request response for invalid query parameters
pub fn build_400_response() -> Response<ResponseBody> {
    plain_text(400, "Bad Request: Invalid query parameters")
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<ResponseBody> {
    plain_text(404, "File not found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<ResponseBody> {
    plain_text(405, "Method Not Allowed")
}

/// Build 408 Request Timeout response
pub fn build_408_response() -> Response<ResponseBody> {
    plain_text(408, "Request Timeout")
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<ResponseBody> {
    plain_text(500, "Internal Server Error")
}

/// Build generic 200 HTML response
pub fn build_html_response(content: String) -> Response<ResponseBody> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .body(full_body(content))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(full_body(Bytes::new()))
        })
}

/// Build generic 200 plain-text response
pub fn build_plain_response(content: String) -> Response<ResponseBody> {
    plain_text(200, content)
}

/// Build a 200 response with an explicit content type and a prepared body.
///
/// Used by the file server, where the body is a stream over the file's
/// bytes rather than a buffered string.
pub fn build_file_response(content_type: &str, body: ResponseBody) -> Response<ResponseBody> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("file", &e);
            Response::new(full_body(Bytes::new()))
        })
}

fn plain_text(status: u16, body: impl Into<Bytes>) -> Response<ResponseBody> {
    let bytes: Bytes = body.into();
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .body(full_body(bytes.clone()))
        .unwrap_or_else(|e| {
            log_build_error("plain-text", &e);
            Response::new(full_body(bytes))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}
