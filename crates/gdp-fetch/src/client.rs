//! HTTP client driving the fetch-then-render pipeline

use crate::{FetchConfig, FetchError};
use gdp_core::{DataError, GdpDataset, GdpSeries};
use gdp_state::AppState;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

// ============================================================================
// GDP CLIENT
// ============================================================================

/// Client for the single dataset fetch
pub struct GdpClient {
    config: FetchConfig,
    state: AppState,
}

impl GdpClient {
    /// Create a client with the default dataset URL
    pub fn new(state: AppState) -> Self {
        Self {
            config: FetchConfig::default(),
            state,
        }
    }

    /// Create with custom configuration
    pub fn with_config(state: AppState, config: FetchConfig) -> Self {
        Self { config, state }
    }

    /// Override the dataset URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Start the load (spawns the async task)
    pub fn load(self) {
        spawn_local(async move {
            self.run().await;
        });
    }

    /// Fetch once and push the outcome into the app state. The render
    /// stage only ever sees a validated series.
    async fn run(self) {
        self.state.set_loading();
        tracing::info!("fetching GDP dataset from {}", self.config.url);

        match self.fetch_series().await {
            Ok(series) => {
                tracing::info!(observations = series.len(), "dataset loaded");
                self.state.set_series(series);
            }
            Err(e) => {
                tracing::error!("dataset load failed: {e}");
                self.state.set_error(e.to_string());
            }
        }
    }

    async fn fetch_series(&self) -> Result<GdpSeries, FetchError> {
        let response = Request::get(&self.config.url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let dataset: GdpDataset =
            serde_json::from_str(&text).map_err(|e| FetchError::Parse(e.to_string()))?;

        let series = GdpSeries::from_dataset(dataset)?;
        if series.is_empty() {
            return Err(DataError::Empty.into());
        }

        Ok(series)
    }
}

// ============================================================================
// LEPTOS INTEGRATION
// ============================================================================

/// Hook to kick off the dataset load from a Leptos component
pub fn use_gdp_loader(state: AppState, url: Option<String>) {
    let config = match url {
        Some(url) => FetchConfig::new(url),
        None => FetchConfig::default(),
    };
    GdpClient::with_config(state, config).load();
}
