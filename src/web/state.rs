//! Application state shared across handlers

use super::Templates;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::NewsSearch;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search orchestrator
    pub search: Arc<NewsSearch>,
    /// Template renderer
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let search = Arc::new(NewsSearch::new(client, &settings.upstream)?);
        let templates = Arc::new(Templates::new()?);

        Ok(Self {
            settings: Arc::new(settings),
            search,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Upstream access credential injected into each search
    pub fn credential(&self) -> &str {
        &self.settings.upstream.api_key
    }
}
