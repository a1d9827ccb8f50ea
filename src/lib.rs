//! Miscellaneous utility library
//!
//! Small helpers for hashing, JSON, HTTP requests and responses, geospatial
//! distance, date/time handling and network lookup, plus a restartable
//! periodic-callback timer ([`PeriodicTimer`]).

pub mod enc;
pub mod geo;
pub mod http;
pub mod json;
pub mod net;
pub mod strings;
pub mod time;

// Re-export main types
pub use time::ticker::{PeriodicTimer, TickerError};
