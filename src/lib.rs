//! Newsdesk: a small web front-end for searching a news article index
//!
//! The interesting part lives in [`search`]: a cancellable, time-bounded
//! outbound request pipeline. One search invocation issues exactly one
//! upstream request, races it against a deadline/cancel signal, and turns
//! the response into a deterministic pagination state. Everything else
//! (routes, templates, settings) is a thin wrapper around that core.

pub mod config;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::{SearchError, SearchFailure};
pub use results::{Article, ResultPage};
pub use search::{NewsSearch, SearchState};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed number of articles requested per upstream page
pub const PAGE_SIZE: u32 = 20;

/// Time budget for one search invocation, in seconds
pub const DEFAULT_SEARCH_TIMEOUT: u64 = 1;
