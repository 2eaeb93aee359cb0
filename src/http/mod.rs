//! HTTP protocol implementation.
//!
//! This module implements the wire-level side of the server: one request per
//! connection, no keep-alive, no request bodies.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Per-connection handler: read the head, dispatch, write, close
//! - **`parser`**: Parses the request head (request line + headers) from byte buffers
//! - **`request`**: The request as handlers see it: path and query parameters
//! - **`response`**: Response representation, handler-mutable metadata, builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Request lifecycle
//!
//! ```text
//!   accept → read request head → dispatch (route | greeting | static file)
//!          → write response → close connection
//! ```
//!
//! The target is the only part of the request line the server interprets;
//! header lines are consumed from the stream but ignored for routing.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
