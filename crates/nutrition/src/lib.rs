//! Nutrition rules for the food check service.
//!
//! This crate provides the pure parts of a food check:
//! - Data model for nutrient profiles, user profiles, and reports
//! - Nutrient extraction from raw upstream product records
//! - Rule-based health scoring
//! - Profile-driven dietary advice

pub mod advice;
pub mod extract;
pub mod model;
pub mod score;

pub use advice::{ADVICE_RULES, AdviceRule, ProfileSignal, advise};
pub use extract::extract_nutrients;
pub use model::{
    FoodReport, HealthAssessment, HealthLabel, Nutrient, NutrientProfile, Product,
    UNKNOWN_PRODUCT_NAME, UserProfile,
};
pub use score::{BASE_SCORE, SCORING_RULES, ScoringRule, score};

/// Builds the full report for a product: extract, score, then advise.
pub fn assess(product: &Product, profile: &UserProfile) -> FoodReport {
    let nutriments = extract_nutrients(&product.nutriments);
    let health_score = score(&nutriments);
    let personalized_advice = advise(&nutriments, profile);

    FoodReport {
        product_name: product.display_name().to_string(),
        nutriments,
        health_score,
        personalized_advice,
    }
}
