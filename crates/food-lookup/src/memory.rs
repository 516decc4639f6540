//! In-memory lookup for tests and local runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use nutrition::Product;

use crate::{FoodLookup, LookupError, Result};

#[derive(Debug, Default)]
struct InMemoryLookupState {
    products: HashMap<String, Product>,
    transport_failure: Option<String>,
    calls: usize,
}

/// In-memory food lookup keyed by case-insensitive food name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodLookup {
    state: Arc<RwLock<InMemoryLookupState>>,
}

impl InMemoryFoodLookup {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product returned for `food`.
    pub fn insert(&self, food: &str, product: Product) {
        self.state
            .write()
            .unwrap()
            .products
            .insert(food.to_lowercase(), product);
    }

    /// Makes every following call fail with a transport error carrying `details`.
    pub fn fail_with(&self, details: impl Into<String>) {
        self.state.write().unwrap().transport_failure = Some(details.into());
    }

    /// Clears a failure set with [`Self::fail_with`].
    pub fn recover(&self) {
        self.state.write().unwrap().transport_failure = None;
    }

    /// Returns the number of lookups performed.
    pub fn call_count(&self) -> usize {
        self.state.read().unwrap().calls
    }
}

#[async_trait]
impl FoodLookup for InMemoryFoodLookup {
    async fn find_first(&self, food: &str) -> Result<Product> {
        let mut state = self.state.write().unwrap();
        state.calls += 1;

        if let Some(details) = &state.transport_failure {
            return Err(LookupError::Transport(details.clone()));
        }

        state
            .products
            .get(&food.to_lowercase())
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}
