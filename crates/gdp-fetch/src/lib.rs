//! # gdp-fetch
//!
//! One-shot HTTP loader for the GDP dataset: fetch, deserialize, validate,
//! hand the series to the app state. A failed load aborts the pipeline --
//! no retry, no partial chart.

pub mod client;

pub use client::*;

use gdp_core::DataError;
use thiserror::Error;

/// Default dataset URL
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// Loader failure taxonomy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed dataset: {0}")]
    Parse(String),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Loader configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config() {
        let config = FetchConfig::new("https://example.com/gdp.json");
        assert_eq!(config.url, "https://example.com/gdp.json");
        assert_eq!(FetchConfig::default().url, DEFAULT_DATA_URL);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "unexpected status 404"
        );
        assert_eq!(
            FetchError::Data(DataError::Empty).to_string(),
            "dataset contains no observations"
        );
    }
}
