//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use food_lookup::LookupError;

pub const NO_FOOD_PROVIDED: &str = "No food provided";
pub const FOOD_NOT_FOUND: &str = "Food not found";
pub const UPSTREAM_FAILURE: &str = "Failed to fetch from OpenFoodFacts";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Resource not found.
    NotFound(String),
    /// The food database could not be reached or returned garbage.
    Upstream { details: String },
}

impl ApiError {
    /// Short label used for the outcome metric.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::Upstream { .. } => "upstream_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            ApiError::Upstream { details } => {
                tracing::error!(error = %details, "food database lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": UPSTREAM_FAILURE, "details": details }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound => ApiError::NotFound(FOOD_NOT_FOUND.to_string()),
            LookupError::Transport(details) => ApiError::Upstream { details },
        }
    }
}
