//! Search orchestration against the news index

use super::executor::{self, AbortSignal};
use super::models::{SearchRequest, SearchState};
use crate::config::UpstreamSettings;
use crate::error::{SearchError, SearchFailure};
use crate::network::HttpClient;
use crate::results::ResultPage;
use crate::PAGE_SIZE;
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Orchestrates one outbound search per invocation.
///
/// Holds only configuration and the shared client; every invocation owns
/// its own request, abort scope and result state, so concurrent searches
/// never touch each other.
pub struct NewsSearch {
    client: HttpClient,
    endpoint: Url,
    language: String,
    timeout: Duration,
}

impl NewsSearch {
    pub fn new(client: HttpClient, settings: &UpstreamSettings) -> Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)?;
        Ok(Self {
            client,
            endpoint,
            language: settings.language.clone(),
            timeout: settings.timeout(),
        })
    }

    /// Time budget one invocation runs under.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch one page of results for `query`.
    ///
    /// Exactly one upstream call, no retries. On failure the returned
    /// [`SearchFailure`] still carries the partially built state (query and
    /// requested page are set); its page and totals must not be trusted.
    pub async fn search(
        &self,
        credential: &str,
        query: &str,
        page: u32,
    ) -> Result<SearchState, SearchFailure> {
        let request = SearchRequest::new(query, page, credential);
        let mut state = SearchState::new(&request.query, request.page);

        if request.credential.is_empty() {
            return Err(SearchFailure::new(state, SearchError::Credential));
        }

        // Fresh abort scope per invocation; the handle drop on return is
        // what releases it, on every exit path.
        let (signal, _abort) = AbortSignal::with_timeout(self.timeout);

        debug!(query = %request.query, page = request.page, "dispatching upstream search");

        let call = {
            let client = self.client.clone();
            let url = self.endpoint.to_string();
            let params = request.query_params(PAGE_SIZE, &self.language);
            let timeout = self.timeout;
            async move { client.get(&url, &params, timeout).await }
        };

        let outcome = executor::execute(signal, call, |response| {
            let response = response?;
            if !response.is_success() {
                return Err(SearchError::Upstream(response.status));
            }
            let page: ResultPage = serde_json::from_str(&response.text)?;
            Ok(page)
        })
        .await;

        match outcome {
            Ok(result_page) => {
                debug!(
                    query = %state.query,
                    total_results = result_page.total_results,
                    "upstream search succeeded"
                );
                state.paginate(result_page, PAGE_SIZE);
                Ok(state)
            }
            Err(error) => {
                warn!(query = %state.query, %error, "upstream search failed");
                Err(SearchFailure::new(state, error))
            }
        }
    }
}
