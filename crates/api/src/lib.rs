//! HTTP API for the food check service.
//!
//! Exposes `POST /check_food`, which looks a food up in OpenFoodFacts,
//! scores it, and returns profile-specific advice. Requests are traced and
//! counted in Prometheus metrics; cross-origin calls are allowed from anywhere.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use food_lookup::{FoodLookup, LookupConfig, LookupError, OpenFoodFactsClient};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::check_food::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<L: FoodLookup + 'static>(
    state: Arc<AppState<L>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/check_food", post(routes::check_food::check::<L>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the production state backed by the OpenFoodFacts client.
pub fn create_default_state(
    lookup_config: &LookupConfig,
) -> Result<Arc<AppState<OpenFoodFactsClient>>, LookupError> {
    let client = OpenFoodFactsClient::new(lookup_config)?;
    Ok(Arc::new(AppState::new(client)))
}
