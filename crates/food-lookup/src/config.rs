//! Upstream lookup configuration.

use std::time::Duration;

/// Default OpenFoodFacts host.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Upper bound on a single lookup, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for [`crate::OpenFoodFactsClient`].
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl LookupConfig {
    /// Creates a config pointing at `base_url` with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
