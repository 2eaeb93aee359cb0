//! Request dispatch
//!
//! Decides for each request target between the built-in greeting capability,
//! invocation of a registered route handler, and static file resolution, and
//! assembles the wire response.

use crate::http::request::Request;
use crate::http::response::{Response, ResponseMeta};
use crate::http::writer::ResponseWriter;
use crate::routing::registry::Router;
use crate::routing::static_files::StaticFiles;
use anyhow::Result;
use tokio::io::AsyncWrite;

/// Prefix stripped from `/app/...` targets to obtain the registry key.
const SERVICE_PREFIX: &str = "/app";

const GREETING_PATH: &str = "/app/helloget";
const GREETING_DATED_PATH: &str = "/app/hellopost";

/// Dispatches parsed request targets for one server instance.
///
/// Borrows the route registry and the static file resolver; both are
/// read-only while serving.
pub struct Dispatcher<'a> {
    router: &'a Router,
    static_files: &'a StaticFiles,
}

impl<'a> Dispatcher<'a> {
    pub fn new(router: &'a Router, static_files: &'a StaticFiles) -> Self {
        Self {
            router,
            static_files,
        }
    }

    /// Handles one request target, writing the complete response to the
    /// client stream.
    ///
    /// Decision rule:
    /// 1. greeting prefixes (`/app/helloget`, `/app/hellopost`) answer
    ///    directly with a JSON greeting;
    /// 2. other `/app/...` targets are service invocations against the
    ///    route registry, keyed by the path with the `/app` prefix removed;
    /// 3. everything else falls back to static file resolution against the
    ///    document root.
    pub async fn dispatch<S>(&self, target: &str, stream: &mut S) -> Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        let path = target.split_once(['?', '#']).map_or(target, |(path, _)| path);

        let response = if path.starts_with(GREETING_PATH) {
            tracing::debug!(target = %target, "Dispatching to greeting");
            greeting(target, false)
        } else if path.starts_with(GREETING_DATED_PATH) {
            tracing::debug!(target = %target, "Dispatching to dated greeting");
            greeting(target, true)
        } else if let Some(service_target) = strip_service_prefix(target) {
            tracing::debug!(target = %target, "Dispatching to service");
            self.invoke_service(service_target)
        } else {
            tracing::debug!(target = %target, "Dispatching to static files");
            return self.static_files.serve(path, stream).await;
        };

        ResponseWriter::new(&response).write_to_stream(stream).await
    }

    /// Invokes a registered service for an already-stripped target.
    ///
    /// Looks up the target's path in the registry. On a hit, builds the
    /// request/response pair, runs the handler, and wraps the body it
    /// returns in a response reflecting the final metadata. On a miss,
    /// returns 404 with body "Service not found".
    pub fn invoke_service(&self, target: &str) -> Response {
        let req = match Request::from_target(target) {
            Ok(req) => req,
            Err(_) => {
                tracing::warn!(target = %target, "Malformed service target");
                return Response::not_found("Service not found");
            }
        };

        match self.router.lookup(req.path()) {
            Some(handler) => {
                let mut meta = ResponseMeta::new();
                let body = handler.handle(&req, &mut meta);
                Response::from_meta(&meta, body)
            }
            None => {
                tracing::debug!(path = %req.path(), "No service registered");
                Response::not_found("Service not found")
            }
        }
    }
}

fn strip_service_prefix(target: &str) -> Option<&str> {
    target
        .strip_prefix(SERVICE_PREFIX)
        .filter(|rest| rest.starts_with('/'))
}

/// Built-in greeting capability.
///
/// Answers the `name` query parameter with a JSON body
/// `{"msg": "Hello <name>"}`; the dated variant appends the current local
/// date to the message. A missing name or unparseable query yields 400 with
/// `{"msg": "Name not found"}`.
fn greeting(target: &str, dated: bool) -> Response {
    let name = match Request::from_target(target) {
        Ok(req) => req.query_value("name").map(str::to_string),
        Err(_) => None,
    };

    let Some(name) = name else {
        return Response::bad_request_json(
            serde_json::json!({"msg": "Name not found"}).to_string(),
        );
    };

    let msg = if dated {
        let today = chrono::Local::now().date_naive();
        format!("Hello {name}, today's date is {today}")
    } else {
        format!("Hello {name}")
    };

    let mut meta = ResponseMeta::new();
    meta.set_content_type("application/json; charset=utf-8");
    Response::from_meta(&meta, serde_json::json!({ "msg": msg }).to_string())
}
