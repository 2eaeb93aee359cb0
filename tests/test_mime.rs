use featherframe::http::mime::{content_type_for, content_type_for_path};
use std::path::Path;

#[test]
fn test_text_types_carry_charset() {
    assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
    assert_eq!(content_type_for(Some("htm")), "text/html; charset=utf-8");
    assert_eq!(content_type_for(Some("css")), "text/css; charset=utf-8");
    assert_eq!(
        content_type_for(Some("js")),
        "application/javascript; charset=utf-8"
    );
    assert_eq!(
        content_type_for(Some("json")),
        "application/json; charset=utf-8"
    );
}

#[test]
fn test_image_types() {
    assert_eq!(content_type_for(Some("png")), "image/png");
    assert_eq!(content_type_for(Some("jpg")), "image/jpeg");
    assert_eq!(content_type_for(Some("jpeg")), "image/jpeg");
    assert_eq!(content_type_for(Some("gif")), "image/gif");
    assert_eq!(content_type_for(Some("svg")), "image/svg+xml");
    assert_eq!(content_type_for(Some("ico")), "image/x-icon");
}

#[test]
fn test_lookup_is_case_insensitive() {
    assert_eq!(content_type_for(Some("HTML")), "text/html; charset=utf-8");
    assert_eq!(content_type_for(Some("Jpeg")), "image/jpeg");
}

#[test]
fn test_unknown_or_missing_extension() {
    assert_eq!(content_type_for(Some("woff2")), "application/octet-stream");
    assert_eq!(content_type_for(None), "application/octet-stream");
}

#[test]
fn test_path_based_lookup() {
    assert_eq!(
        content_type_for_path(Path::new("webroot/style.css")),
        "text/css; charset=utf-8"
    );
    assert_eq!(
        content_type_for_path(Path::new("webroot/no_extension")),
        "application/octet-stream"
    );
}
