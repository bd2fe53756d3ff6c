//! Search request and pagination state models

use crate::results::ResultPage;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One outbound search request. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search term. Non-empty by the caller boundary's contract.
    pub query: String,
    /// Requested result page, 1-indexed.
    pub page: u32,
    /// Upstream access credential.
    pub credential: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: u32, credential: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
            credential: credential.into(),
        }
    }

    /// Query parameters for the upstream search endpoint.
    pub fn query_params(&self, page_size: u32, language: &str) -> Vec<(String, String)> {
        vec![
            ("q".to_string(), self.query.clone()),
            ("pageSize".to_string(), page_size.to_string()),
            ("page".to_string(), self.page.to_string()),
            ("apiKey".to_string(), self.credential.clone()),
            ("sortBy".to_string(), "publishedAt".to_string()),
            ("language".to_string(), language.to_string()),
        ]
    }
}

/// Pagination state produced by one search invocation.
///
/// Owned exclusively by the caller after the orchestrator returns it; the
/// orchestrator keeps no reference. `elapsed` and `timeout` are recorded by
/// the calling layer, which is the one measuring wall-clock time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchState {
    /// The search term this state was built for.
    pub query: String,
    /// The page the cursor points at next. Starts at the requested page and
    /// advances by one on a successful fetch that was not the last page.
    pub requested_page: u32,
    /// Number of page-size-20 buckets in the result set (floor division).
    pub total_pages: u32,
    /// Wall-clock time the invocation took, recorded by the caller.
    pub elapsed: Duration,
    /// Time budget the invocation ran under, recorded by the caller.
    pub timeout: Duration,
    /// The fetched page of results. Only valid on a successful invocation.
    pub page: ResultPage,
}

impl SearchState {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            requested_page: page.max(1),
            ..Default::default()
        }
    }

    /// Whether the cursor has reached the final page bucket.
    pub fn is_last_page(&self) -> bool {
        self.requested_page >= self.total_pages
    }

    /// The page the most recent fetch actually displayed.
    pub fn current_page(&self) -> u32 {
        if self.requested_page == 1 {
            self.requested_page
        } else {
            self.requested_page - 1
        }
    }

    /// The page before the one on display.
    pub fn previous_page(&self) -> u32 {
        self.current_page() - 1
    }

    /// Fold a fetched page into the state and advance the cursor.
    ///
    /// `total_pages` is the floor of totalResults / pageSize, counting full
    /// page-size buckets rather than pages needed. The cursor only moves
    /// when the last-page check (evaluated before the increment) says there
    /// is more to fetch. Only ever called on the success path.
    pub fn paginate(&mut self, page: ResultPage, page_size: u32) {
        self.total_pages = page.total_results / page_size;
        self.page = page;
        if !self.is_last_page() {
            self.requested_page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_total(total_results: u32) -> ResultPage {
        ResultPage {
            status: "ok".to_string(),
            total_results,
            articles: vec![],
        }
    }

    #[test]
    fn test_request_clamps_page() {
        let request = SearchRequest::new("rust", 0, "key");
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_query_params() {
        let request = SearchRequest::new("rust lang", 3, "secret");
        let params = request.query_params(20, "en");

        let get = |k: &str| {
            params
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("q"), Some("rust lang"));
        assert_eq!(get("pageSize"), Some("20"));
        assert_eq!(get("page"), Some("3"));
        assert_eq!(get("apiKey"), Some("secret"));
        assert_eq!(get("sortBy"), Some("publishedAt"));
        assert_eq!(get("language"), Some("en"));
    }

    #[test]
    fn test_total_pages_floor_division() {
        // 95 results at page size 20 counts 4 full buckets, not the 5
        // pages a viewer would need. Preserved as observed.
        let mut state = SearchState::new("q", 1);
        state.paginate(page_with_total(95), 20);
        assert_eq!(state.total_pages, 4);

        let mut exact = SearchState::new("q", 1);
        exact.paginate(page_with_total(100), 20);
        assert_eq!(exact.total_pages, 5);

        let mut small = SearchState::new("q", 1);
        small.paginate(page_with_total(19), 20);
        assert_eq!(small.total_pages, 0);
    }

    #[test]
    fn test_cursor_advances_when_not_last_page() {
        let mut state = SearchState::new("q", 1);
        state.paginate(page_with_total(100), 20);
        assert_eq!(state.requested_page, 2);
        assert!(!state.is_last_page());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_cursor_holds_on_last_page() {
        let mut state = SearchState::new("q", 5);
        state.paginate(page_with_total(100), 20);
        // 5 >= 5 before the increment, so the cursor stays put.
        assert_eq!(state.requested_page, 5);
        assert!(state.is_last_page());
        assert_eq!(state.current_page(), 4);
        assert_eq!(state.previous_page(), 3);
    }

    #[test]
    fn test_first_page_cursor_pair() {
        let state = SearchState::new("q", 1);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.previous_page(), 0);
    }
}
