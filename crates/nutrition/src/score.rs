//! Rule-based health scoring.

use crate::model::{HealthAssessment, HealthLabel, Nutrient, NutrientProfile};

/// Score before any penalty is applied.
pub const BASE_SCORE: i32 = 100;

/// A single penalty rule: fires when the selected nutrient exceeds `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRule {
    pub nutrient: Nutrient,
    pub threshold: f64,
    pub penalty: i32,
    pub reason: &'static str,
}

impl ScoringRule {
    /// Returns true if the rule's threshold is strictly exceeded.
    pub fn fires(&self, nutrients: &NutrientProfile) -> bool {
        self.nutrient.value(nutrients) > self.threshold
    }
}

/// Penalty rules in evaluation order.
pub const SCORING_RULES: [ScoringRule; 4] = [
    ScoringRule {
        nutrient: Nutrient::Calories,
        threshold: 700.0,
        penalty: 40,
        reason: "High calories",
    },
    ScoringRule {
        nutrient: Nutrient::Sugars,
        threshold: 30.0,
        penalty: 30,
        reason: "High sugar",
    },
    ScoringRule {
        nutrient: Nutrient::SaturatedFat,
        threshold: 10.0,
        penalty: 20,
        reason: "High saturated fat",
    },
    ScoringRule {
        nutrient: Nutrient::Sodium,
        threshold: 1000.0,
        penalty: 15,
        reason: "High sodium",
    },
];

/// Scores a nutrient profile.
///
/// Every rule is evaluated independently; the score is [`BASE_SCORE`] minus
/// the penalties of the rules that fired and may go below zero.
pub fn score(nutrients: &NutrientProfile) -> HealthAssessment {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();

    for rule in SCORING_RULES.iter().filter(|rule| rule.fires(nutrients)) {
        score -= rule.penalty;
        reasons.push(rule.reason.to_string());
    }

    HealthAssessment {
        score,
        label: HealthLabel::from_score(score),
        reasons,
    }
}
