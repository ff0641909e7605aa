//! Core application surface (HTTP server).

pub mod http;

pub use http::*;
