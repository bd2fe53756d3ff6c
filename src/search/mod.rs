//! The search core
//!
//! One invocation builds the outbound request, runs it through the
//! cancellable executor under a fresh deadline scope, and folds the
//! response into a pagination state the caller owns outright.

mod executor;
mod models;
mod orchestrator;

pub use executor::{execute, AbortHandle, AbortReason, AbortSignal};
pub use models::{SearchRequest, SearchState};
pub use orchestrator::NewsSearch;
