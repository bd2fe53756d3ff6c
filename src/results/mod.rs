//! Upstream result types
//!
//! Mirrors the JSON shape of the news index's search endpoint.

mod types;

pub use types::*;
