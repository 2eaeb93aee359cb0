//! MIME type detection based on file extensions.
//!
//! Maps a file extension to the Content-Type header value used when serving
//! static files. Text types carry an explicit UTF-8 charset.

use std::path::Path;

/// Returns the Content-Type for a file extension.
///
/// The lookup is case-insensitive. Unknown or missing extensions fall back
/// to `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use featherframe::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(content_type_for(Some("PNG")), "image/png");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    let lowered = extension.map(str::to_ascii_lowercase);

    match lowered.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Returns the Content-Type for a filesystem path, based on its extension.
pub fn content_type_for_path(path: &Path) -> &'static str {
    content_type_for(path.extension().and_then(|ext| ext.to_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_types() {
        assert_eq!(content_type_for(Some("htm")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Some("css")), "text/css; charset=utf-8");
        assert_eq!(content_type_for(Some("svg")), "image/svg+xml");
        assert_eq!(content_type_for(Some("ico")), "image/x-icon");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(content_type_for(Some("exe")), "application/octet-stream");
        assert_eq!(content_type_for(None), "application/octet-stream");
    }

    #[test]
    fn path_extension_lookup() {
        assert_eq!(
            content_type_for_path(Path::new("webroot/index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for_path(Path::new("webroot/README")),
            "application/octet-stream"
        );
    }
}
