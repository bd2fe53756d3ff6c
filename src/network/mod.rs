//! HTTP networking module
//!
//! Thin wrapper around `reqwest` for talking to the news index.

mod client;

pub use client::{HttpClient, UpstreamResponse};
