//! Static file resolution and streaming
//!
//! Resolves request paths against the configured document root, applying the
//! directory index rule, and streams file bytes straight to the connection.
//! File payloads may be binary, so they bypass the text response path.

use crate::http::mime;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

const INDEX_FILE: &str = "index.html";

/// Resolves and serves files under a document root.
///
/// The root is set during server configuration and read (never mutated)
/// during lookups. No writes ever occur under the root.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Replaces the document root. Subsequent lookups use only the new value.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a request path to an existing file under the root.
    ///
    /// The leading slash is stripped and the remainder joined to the root.
    /// If the resolved path is a directory, `index.html` is appended before
    /// the existence check. Returns `None` when no file exists there or when
    /// the path attempts to traverse out of the root.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = request_path.trim_start_matches('/');

        // Reject traversal out of the document root
        if relative.split('/').any(|segment| segment == "..") {
            tracing::warn!(path = %request_path, "Rejected traversal in static path");
            return None;
        }

        let mut file_path = self.root.join(relative);

        if file_path.is_dir() {
            file_path = file_path.join(INDEX_FILE);
        }

        if file_path.is_file() {
            Some(file_path)
        } else {
            None
        }
    }

    /// Serves a request path to the client stream.
    ///
    /// On a hit, writes a 200 head with the Content-Type from the MIME table
    /// and the Content-Length from file metadata, then streams the raw file
    /// bytes. On a miss, writes a 404 with body "File not found".
    pub async fn serve<S>(&self, request_path: &str, stream: &mut S) -> Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        match self.resolve(request_path) {
            Some(file_path) => self.stream_file(&file_path, stream).await,
            None => {
                tracing::debug!(path = %request_path, "Static file not found");
                let head = "HTTP/1.1 404 Not Found\r\n\
                            Content-Type: text/plain; charset=utf-8\r\n\
                            Content-Length: 14\r\n\
                            \r\n\
                            File not found";
                stream
                    .write_all(head.as_bytes())
                    .await
                    .context("writing 404 response")?;
                Ok(())
            }
        }
    }

    async fn stream_file<S>(&self, file_path: &Path, stream: &mut S) -> Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        let metadata = tokio::fs::metadata(file_path)
            .await
            .with_context(|| format!("reading metadata for {}", file_path.display()))?;

        let content_type = mime::content_type_for_path(file_path);

        tracing::debug!(
            file = %file_path.display(),
            size = metadata.len(),
            content_type = content_type,
            "Serving static file"
        );

        let head = format!(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: {}\r\n\
             Content-Length: {}\r\n\
             \r\n",
            content_type,
            metadata.len()
        );
        stream
            .write_all(head.as_bytes())
            .await
            .context("writing response head")?;

        let mut file = tokio::fs::File::open(file_path)
            .await
            .with_context(|| format!("opening {}", file_path.display()))?;

        tokio::io::copy(&mut file, stream)
            .await
            .context("streaming file body")?;

        Ok(())
    }
}
