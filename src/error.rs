//! Error taxonomy for the search pipeline
//!
//! Every failure is surfaced to the immediate caller exactly once; nothing
//! here retries or swallows. [`SearchFailure`] pairs the error with whatever
//! partial [`SearchState`] was built before things went wrong, so the caller
//! can still render the query context.

use crate::search::SearchState;
use thiserror::Error;

/// Everything that can go wrong between accepting a query and returning a
/// populated page of results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured upstream access credential is missing or empty.
    #[error("missing upstream access credential")]
    Credential,

    /// Network-level failure building or sending the request.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The index service answered with a non-success status.
    #[error("upstream returned status {0}")]
    Upstream(u16),

    /// The index service answered 200 with a body we could not decode.
    #[error("malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The invocation's time budget elapsed before the call completed.
    #[error("search deadline exceeded")]
    DeadlineExceeded,

    /// The invocation was cancelled explicitly.
    #[error("search canceled")]
    Canceled,
}

impl SearchError {
    /// True for the signal-driven abort variants.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::DeadlineExceeded | Self::Canceled)
    }
}

/// A failed search invocation, carrying the partially populated state.
///
/// The pagination and totals fields of `state` must not be trusted; the
/// query and requested page are always set.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct SearchFailure {
    pub state: SearchState,
    #[source]
    pub error: SearchError,
}

impl SearchFailure {
    pub fn new(state: SearchState, error: SearchError) -> Self {
        Self { state, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_classification() {
        assert!(SearchError::DeadlineExceeded.is_aborted());
        assert!(SearchError::Canceled.is_aborted());
        assert!(!SearchError::Credential.is_aborted());
        assert!(!SearchError::Upstream(500).is_aborted());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SearchError::Upstream(503).to_string(),
            "upstream returned status 503"
        );
        assert_eq!(
            SearchError::Credential.to_string(),
            "missing upstream access credential"
        );
    }
}
