//! Food check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use food_lookup::FoodLookup;
use nutrition::{FoodReport, UserProfile};
use serde::Deserialize;

use crate::error::{ApiError, NO_FOOD_PROVIDED};

/// Shared application state accessible from all handlers.
pub struct AppState<L: FoodLookup> {
    pub lookup: L,
}

impl<L: FoodLookup> AppState<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }
}

// -- Request types --

/// Body of `POST /check_food`.
///
/// Both fields may be omitted or null; a missing or empty `food` is rejected
/// by the handler, a missing `profile` is treated as empty.
#[derive(Debug, Deserialize)]
pub struct CheckFoodRequest {
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl CheckFoodRequest {
    /// Returns the food name if one was supplied and is non-empty.
    pub fn food(&self) -> Option<&str> {
        self.food.as_deref().filter(|food| !food.is_empty())
    }
}

// -- Handlers --

/// POST /check_food — look a food up, score it, and advise against the profile.
#[tracing::instrument(skip(state, payload))]
pub async fn check<L: FoodLookup + 'static>(
    State(state): State<Arc<AppState<L>>>,
    payload: Result<Json<CheckFoodRequest>, JsonRejection>,
) -> Result<Json<FoodReport>, ApiError> {
    let result = run_check(&state, payload).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(err) => err.outcome(),
    };
    metrics::counter!("food_checks_total", "outcome" => outcome).increment(1);

    result.map(Json)
}

async fn run_check<L: FoodLookup>(
    state: &AppState<L>,
    payload: Result<Json<CheckFoodRequest>, JsonRejection>,
) -> Result<FoodReport, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let food = req
        .food()
        .ok_or_else(|| ApiError::BadRequest(NO_FOOD_PROVIDED.to_string()))?;

    let product = state.lookup.find_first(food).await?;
    let profile = req.profile.clone().unwrap_or_default();
    let report = nutrition::assess(&product, &profile);

    tracing::info!(
        food,
        product = %report.product_name,
        score = report.health_score.score,
        label = %report.health_score.label,
        advice = report.personalized_advice.len(),
        "food checked"
    );

    Ok(report)
}
