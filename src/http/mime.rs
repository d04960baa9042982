//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::path::Path;

/// Get MIME Content-Type based on file extension
///
/// Unknown extensions (including none at all) fall back to `text/html`,
/// which also covers `.html` itself.
///
/// # Examples
/// ```
/// use staticd::http::mime::get_content_type;
/// use std::path::Path;
/// assert_eq!(get_content_type(Path::new("photo.jpeg")), "image/jpeg");
/// assert_eq!(get_content_type(Path::new("page.html")), "text/html");
/// ```
pub fn get_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        _ => "text/html",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(get_content_type(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(get_content_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(get_content_type(Path::new("a.png")), "image/png");
        assert_eq!(get_content_type(Path::new("style.css")), "text/css");
        assert_eq!(get_content_type(Path::new("app.js")), "text/javascript");
    }

    #[test]
    fn test_fallback_is_html() {
        assert_eq!(get_content_type(Path::new("index.html")), "text/html");
        assert_eq!(get_content_type(Path::new("archive.zip")), "text/html");
        assert_eq!(get_content_type(Path::new("README")), "text/html");
    }
}
