//! Featherframe - Minimal Web Framework
//!
//! Core library for the HTTP server, request routing, and static file serving.

pub mod config;
pub mod http;
pub mod routing;
pub mod server;
