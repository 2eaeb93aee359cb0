//! Server configuration surface and accept loop.

pub mod listener;

use crate::config::Config;
use crate::routing::{Handler, Router, StaticFiles};

/// A configured server instance.
///
/// Owns the route registry and the static file resolver. Configuration
/// (route registration, document root) happens before [`Server::start`];
/// once serving begins, both are read-only.
pub struct Server {
    config: Config,
    router: Router,
    static_files: StaticFiles,
}

impl Server {
    /// Creates a server with an empty route registry and the document root
    /// set to the configured resource base directory.
    pub fn new(config: Config) -> Self {
        let static_files = StaticFiles::new(config.resource_base.clone());
        Self {
            config,
            router: Router::new(),
            static_files,
        }
    }

    /// Registers a handler for an exact path. Re-registering a path
    /// replaces the previous handler.
    pub fn register(&mut self, path: impl Into<String>, handler: impl Handler + 'static) {
        self.router.register(path, handler);
    }

    /// Sets the document root for static files, relative to the configured
    /// resource base directory. Repeated calls replace the previous value.
    pub fn set_static_root(&mut self, path: &str) {
        let root = self
            .config
            .resource_base
            .join(path.trim_start_matches('/'));
        tracing::info!(root = %root.display(), "Static root set");
        self.static_files.set_root(root);
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn static_files(&self) -> &StaticFiles {
        &self.static_files
    }

    /// Binds the listening socket and blocks in the accept loop.
    ///
    /// Returns only on a fatal error: bind failure or accept failure.
    pub async fn start(&self) -> anyhow::Result<()> {
        listener::run(&self.config.listen_addr, &self.router, &self.static_files).await
    }
}
