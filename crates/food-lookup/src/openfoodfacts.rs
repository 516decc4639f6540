//! OpenFoodFacts search client.

use std::time::Instant;

use async_trait::async_trait;
use nutrition::Product;
use serde::Deserialize;
use serde_json::Value;

use crate::{FoodLookup, LookupConfig, LookupError, Result};

const SEARCH_PATH: &str = "/cgi/search.pl";

/// Search response envelope. Only `products` is read, and only its first
/// record is decoded into a [`Product`].
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Option<Vec<Value>>,
}

/// Looks foods up through the OpenFoodFacts simple search.
///
/// Each call issues exactly one GET asking for a single JSON result. The
/// configured timeout bounds the whole request.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    /// Creates a client from the given configuration.
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("food-check/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the search URL for `food`. The name is percent-encoded, so
    /// spaces become `%20`.
    pub fn search_url(&self, food: &str) -> String {
        format!(
            "{}{}?search_terms={}&search_simple=1&action=process&json=1&page_size=1",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(food)
        )
    }

    async fn search(&self, food: &str) -> Result<Product> {
        let url = self.search_url(food);
        tracing::debug!(%url, "querying food database");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let parsed: SearchResponse = match serde_json::from_slice(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(LookupError::Transport(format!(
                    "upstream returned {status}"
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let record = parsed
            .products
            .and_then(|products| products.into_iter().next())
            .ok_or(LookupError::NotFound)?;

        Ok(Product::try_from(record)?)
    }
}

#[async_trait]
impl FoodLookup for OpenFoodFactsClient {
    #[tracing::instrument(skip(self))]
    async fn find_first(&self, food: &str) -> Result<Product> {
        let start = Instant::now();
        let result = self.search(food).await;

        let outcome = match &result {
            Ok(_) => "found",
            Err(LookupError::NotFound) => "not_found",
            Err(LookupError::Transport(details)) => {
                tracing::warn!(error = %details, "food lookup failed");
                "error"
            }
        };
        metrics::counter!("food_lookup_requests_total", "outcome" => outcome).increment(1);
        metrics::histogram!("food_lookup_duration_seconds").record(start.elapsed().as_secs_f64());

        result
    }
}
