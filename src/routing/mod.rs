//! Request routing
//!
//! This module implements the dynamic side of the server: the route
//! registry, the request dispatcher, and static file resolution.

pub mod dispatcher;
pub mod registry;
pub mod static_files;

pub use dispatcher::Dispatcher;
pub use registry::{Handler, Router};
pub use static_files::StaticFiles;
