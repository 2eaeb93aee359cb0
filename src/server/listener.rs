use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::Connection;
use crate::routing::{Dispatcher, Router, StaticFiles};

/// Binds the listener and runs the accept loop.
///
/// Strictly sequential: each connection is fully served and closed before
/// the next accept. Bind and accept failures are fatal and propagate to the
/// caller; per-connection errors are logged and the loop continues.
pub async fn run(
    listen_addr: &str,
    router: &Router,
    static_files: &StaticFiles,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("could not listen on {listen_addr}"))?;
    info!("Listening on {}", listen_addr);

    loop {
        let (socket, peer) = listener.accept().await.context("accept failed")?;
        info!("Accepted connection from {}", peer);

        let dispatcher = Dispatcher::new(router, static_files);
        let conn = Connection::new(socket, dispatcher);
        if let Err(e) = conn.serve().await {
            tracing::warn!("Connection error from {}: {}", peer, e);
        }
    }
}
