//! Food database lookups.
//!
//! Provides the `FoodLookup` trait, an OpenFoodFacts-backed client, and an
//! in-memory implementation for tests.

pub mod config;
pub mod error;
pub mod lookup;
pub mod memory;
pub mod openfoodfacts;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, LookupConfig};
pub use error::{LookupError, Result};
pub use lookup::FoodLookup;
pub use memory::InMemoryFoodLookup;
pub use openfoodfacts::OpenFoodFactsClient;
