//! Static file serving module
//!
//! Resolves URL paths under the public root and serves files, directory
//! index pages, or plain-text directory listings. File bodies are
//! streamed chunk by chunk instead of being buffered whole.

use crate::http::{self, mime, response, ResponseBody};
use crate::logger;
use futures_util::TryStreamExt;
use http_body_util::{BodyExt, StreamBody};
use hyper::body::Frame;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio_util::io::ReaderStream;

/// Directory index file looked up before falling back to a listing.
const DIRECTORY_INDEX: &str = "index.html";

/// Serve the literal index page for the root route.
///
/// The page is read as UTF-8 text; an unreadable page is a server error
/// rather than a 404.
pub async fn serve_index_page(public_dir: &str, index_page: &str) -> Response<ResponseBody> {
    let page_path = Path::new(public_dir).join(index_page);
    match fs::read_to_string(&page_path).await {
        Ok(content) => http::build_html_response(content),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read index page '{}': {e}",
                page_path.display()
            ));
            http::build_500_response()
        }
    }
}

/// Serve a static path resolved under the public root.
///
/// Directories are served through their `index.html` when present and as
/// a plain-text listing otherwise.
pub async fn serve_path(url_path: &str, public_dir: &str) -> Response<ResponseBody> {
    let Some(file_path) = resolve(url_path, public_dir).await else {
        return http::build_404_response();
    };

    let Ok(metadata) = fs::metadata(&file_path).await else {
        return http::build_404_response();
    };

    if metadata.is_dir() {
        let index_path = file_path.join(DIRECTORY_INDEX);
        match fs::metadata(&index_path).await {
            Ok(m) if m.is_file() => serve_file(&index_path).await,
            _ => serve_directory_listing(&file_path).await,
        }
    } else {
        serve_file(&file_path).await
    }
}

/// Resolve a URL path to a filesystem path under the public root.
///
/// Both the root and the candidate are canonicalized and a candidate
/// that escapes the root is rejected. A path that does not exist fails
/// canonicalization and resolves to `None` (a plain 404).
async fn resolve(url_path: &str, public_dir: &str) -> Option<PathBuf> {
    let root = match fs::canonicalize(public_dir).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Public root not found or inaccessible '{public_dir}': {e}"
            ));
            return None;
        }
    };

    let relative = url_path.trim_start_matches('/');
    let candidate = root.join(relative);
    let canonical = fs::canonicalize(&candidate).await.ok()?;

    if canonical.starts_with(&root) {
        Some(canonical)
    } else {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            url_path,
            canonical.display()
        ));
        None
    }
}

/// Serve a regular file, streaming its bytes.
async fn serve_file(file_path: &Path) -> Response<ResponseBody> {
    let file = match fs::File::open(file_path).await {
        Ok(f) => f,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to open file '{}': {e}",
                file_path.display()
            ));
            return http::build_404_response();
        }
    };

    let content_type = mime::get_content_type(file_path);
    let stream = ReaderStream::new(file);
    let body = StreamBody::new(stream.map_ok(Frame::data)).boxed();
    response::build_file_response(content_type, body)
}

/// Serve a plain-text listing of a directory's entries.
async fn serve_directory_listing(dir_path: &Path) -> Response<ResponseBody> {
    let mut entries = match fs::read_dir(dir_path).await {
        Ok(e) => e,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read directory '{}': {e}",
                dir_path.display()
            ));
            return http::build_500_response();
        }
    };

    let mut names = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => names.push(entry.file_name().to_string_lossy().into_owned()),
            Ok(None) => break,
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read directory '{}': {e}",
                    dir_path.display()
                ));
                return http::build_500_response();
            }
        }
    }

    http::build_plain_response(format!("Directory Listing:\n{}", names.join("\n")))
}
