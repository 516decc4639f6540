//! Data types shared by the extractor, scorer, and advice generator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product name reported when the upstream record carries none.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown";

/// Per-100g nutrient values used for scoring and advice.
///
/// Values are taken as reported upstream: no unit conversion and no
/// plausibility checks, so negative numbers pass through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: f64,
    pub sugars: f64,
    pub saturated_fat: f64,
    pub sodium: f64,
    pub protein: f64,
}

/// Selects one field of a [`NutrientProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Sugars,
    SaturatedFat,
    Sodium,
    Protein,
}

impl Nutrient {
    pub fn value(&self, profile: &NutrientProfile) -> f64 {
        match self {
            Self::Calories => profile.calories,
            Self::Sugars => profile.sugars,
            Self::SaturatedFat => profile.saturated_fat,
            Self::Sodium => profile.sodium,
            Self::Protein => profile.protein,
        }
    }
}

/// Caller-supplied health profile.
///
/// `conditions` is free text that may name several conditions; `goal` is a
/// single dietary goal. Both are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub conditions: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub goal: String,
}

impl UserProfile {
    /// Creates a profile from condition text and a goal.
    pub fn new(conditions: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            conditions: conditions.into(),
            goal: goal.into(),
        }
    }
}

/// Coarse health band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLabel {
    Healthy,
    Moderate,
    Unhealthy,
}

impl HealthLabel {
    /// Minimum score labelled [`HealthLabel::Healthy`].
    pub const HEALTHY_MIN: i32 = 85;
    /// Minimum score labelled [`HealthLabel::Moderate`].
    pub const MODERATE_MIN: i32 = 60;

    /// Maps a score onto its band.
    pub fn from_score(score: i32) -> Self {
        if score >= Self::HEALTHY_MIN {
            Self::Healthy
        } else if score >= Self::MODERATE_MIN {
            Self::Moderate
        } else {
            Self::Unhealthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
        }
    }
}

impl std::fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a [`NutrientProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// 100 minus the penalties of every rule that fired. Not clamped at zero.
    pub score: i32,
    pub label: HealthLabel,
    /// Reasons in rule-evaluation order.
    pub reasons: Vec<String>,
}

/// Combined lookup, score, and advice returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodReport {
    pub product_name: String,
    pub nutriments: NutrientProfile,
    pub health_score: HealthAssessment,
    pub personalized_advice: Vec<String>,
}

/// A product record as returned by the food database search.
///
/// Only the fields the service reads are typed; `nutriments` stays a loose
/// map because upstream records omit keys freely. A `product_name` that is
/// not a string is dropped rather than failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "string_or_none")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty_map")]
    pub nutriments: Map<String, Value>,
}

impl Product {
    /// Returns the product name, or [`UNKNOWN_PRODUCT_NAME`] when there is none.
    /// An empty upstream name is returned as-is.
    pub fn display_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or(UNKNOWN_PRODUCT_NAME)
    }
}

impl TryFrom<Value> for Product {
    type Error = serde_json::Error;

    fn try_from(record: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(record)
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    })
}
