use async_trait::async_trait;
use nutrition::Product;

use crate::Result;

/// Core trait for food database lookups.
///
/// Implementations make a single attempt per call: no retries, no caching.
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Searches for `food` and returns the first matching product.
    ///
    /// Fails with `LookupError::NotFound` when the search yields no products
    /// and with `LookupError::Transport` when the search itself fails.
    async fn find_first(&self, food: &str) -> Result<Product>;
}
