//! Route registry
//!
//! Maps exact request paths to handler capabilities. The registry is
//! populated during server configuration, before the accept loop starts,
//! and is read-only while serving.

use crate::http::request::Request;
use crate::http::response::ResponseMeta;
use std::collections::HashMap;

/// A route handler capability.
///
/// Given the parsed request, produces the response body and may mutate the
/// response metadata (status, status message, content type). Implemented for
/// any matching closure, so applications can register plain closures.
pub trait Handler: Send + Sync {
    fn handle(&self, req: &Request, meta: &mut ResponseMeta) -> String;
}

impl<F> Handler for F
where
    F: Fn(&Request, &mut ResponseMeta) -> String + Send + Sync,
{
    fn handle(&self, req: &Request, meta: &mut ResponseMeta) -> String {
        self(req, meta)
    }
}

/// Registry of exact-path routes owned by the server instance.
#[derive(Default)]
pub struct Router {
    routes: HashMap<String, Box<dyn Handler>>,
}

impl Router {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a handler for an exact path.
    ///
    /// Path keys are unique; re-registering a path replaces the previous
    /// handler.
    pub fn register(&mut self, path: impl Into<String>, handler: impl Handler + 'static) {
        let path = path.into();
        tracing::debug!(path = %path, "Registering route");
        self.routes.insert(path, Box::new(handler));
    }

    /// Looks up the handler registered for an exact path.
    pub fn lookup(&self, path: &str) -> Option<&dyn Handler> {
        self.routes.get(path).map(|h| h.as_ref())
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
