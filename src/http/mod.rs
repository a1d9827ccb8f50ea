//! HTTP request and response helpers.
//!
//! Client-side helpers build on `reqwest`; server-side helpers build on
//! `tiny_http`.

pub mod request;
pub mod response;
pub mod server;
