use featherframe::routing::StaticFiles;
use std::fs;

fn head_and_body(wire: &[u8]) -> (String, Vec<u8>) {
    let split = wire
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no head/body separator");
    (
        String::from_utf8(wire[..split].to_vec()).unwrap(),
        wire[split + 4..].to_vec(),
    )
}

#[tokio::test]
async fn test_existing_file_served_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let content = b"<html><body>Hello</body></html>";
    fs::write(tmp.path().join("test.html"), content).unwrap();

    let statics = StaticFiles::new(tmp.path());
    let mut out: Vec<u8> = Vec::new();
    statics.serve("/test.html", &mut out).await.unwrap();

    let (head, body) = head_and_body(&out);
    assert!(head.contains("200 OK"));
    assert!(head.contains("Content-Type: text/html; charset=utf-8"));
    assert!(head.contains(&format!("Content-Length: {}", content.len())));
    assert_eq!(body, content.to_vec());
}

#[tokio::test]
async fn test_binary_file_served_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let content: Vec<u8> = vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0x01, 0xff, 0xfe];
    fs::write(tmp.path().join("pixel.png"), &content).unwrap();

    let statics = StaticFiles::new(tmp.path());
    let mut out: Vec<u8> = Vec::new();
    statics.serve("/pixel.png", &mut out).await.unwrap();

    let (head, body) = head_and_body(&out);
    assert!(head.contains("Content-Type: image/png"));
    assert_eq!(body, content);
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let tmp = tempfile::tempdir().unwrap();
    let statics = StaticFiles::new(tmp.path());

    let mut out: Vec<u8> = Vec::new();
    statics.serve("/nope.html", &mut out).await.unwrap();

    let wire = String::from_utf8(out).unwrap();
    assert!(wire.contains("404 Not Found"));
    assert!(wire.ends_with("File not found"));
}

#[tokio::test]
async fn test_directory_resolves_to_index_file() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("docs")).unwrap();
    fs::write(tmp.path().join("docs/index.html"), b"<h1>docs</h1>").unwrap();

    let statics = StaticFiles::new(tmp.path());

    let resolved = statics.resolve("/docs").unwrap();
    assert!(resolved.ends_with("docs/index.html"));

    let mut out: Vec<u8> = Vec::new();
    statics.serve("/docs", &mut out).await.unwrap();
    let (head, body) = head_and_body(&out);
    assert!(head.contains("200 OK"));
    assert_eq!(body, b"<h1>docs</h1>".to_vec());
}

#[tokio::test]
async fn test_root_path_serves_top_level_index() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("index.html"), b"home").unwrap();

    let statics = StaticFiles::new(tmp.path());
    let mut out: Vec<u8> = Vec::new();
    statics.serve("/", &mut out).await.unwrap();

    let (head, body) = head_and_body(&out);
    assert!(head.contains("200 OK"));
    assert_eq!(body, b"home".to_vec());
}

#[test]
fn test_directory_without_index_does_not_resolve() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("empty")).unwrap();

    let statics = StaticFiles::new(tmp.path());
    assert!(statics.resolve("/empty").is_none());
}

#[test]
fn test_traversal_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let statics = StaticFiles::new(tmp.path().join("webroot"));

    assert!(statics.resolve("/../secret.txt").is_none());
    assert!(statics.resolve("/a/../../secret.txt").is_none());
}

#[tokio::test]
async fn test_set_root_uses_only_latest_value() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("first");
    let second = tmp.path().join("second");
    fs::create_dir(&first).unwrap();
    fs::create_dir(&second).unwrap();
    fs::write(first.join("page.html"), b"first root").unwrap();
    fs::write(second.join("page.html"), b"second root").unwrap();

    let mut statics = StaticFiles::new(&first);
    statics.set_root(&second);

    assert_eq!(statics.root(), second.as_path());

    let mut out: Vec<u8> = Vec::new();
    statics.serve("/page.html", &mut out).await.unwrap();
    let (_, body) = head_and_body(&out);
    assert_eq!(body, b"second root".to_vec());

    // A file that exists only under the old root is no longer reachable
    fs::write(first.join("only_first.html"), b"x").unwrap();
    assert!(statics.resolve("/only_first.html").is_none());
}
