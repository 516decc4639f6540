//! Personalized dietary warnings driven by the caller's health profile.

use crate::model::{Nutrient, NutrientProfile, UserProfile};

/// Which part of the [`UserProfile`] an advice rule matches, and how.
#[derive(Debug, Clone, Copy)]
pub enum ProfileSignal {
    /// Lowercased `conditions` contains this text.
    Condition(&'static str),
    /// Lowercased `goal` equals this text exactly.
    Goal(&'static str),
}

impl ProfileSignal {
    fn matches(&self, conditions: &str, goal: &str) -> bool {
        match self {
            Self::Condition(name) => conditions.contains(name),
            Self::Goal(name) => goal == *name,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdviceRule {
    pub signal: ProfileSignal,
    pub nutrient: Nutrient,
    pub threshold: f64,
    pub advice: &'static str,
}

/// Advice rules in output order.
pub const ADVICE_RULES: [AdviceRule; 3] = [
    AdviceRule {
        signal: ProfileSignal::Condition("diabetes"),
        nutrient: Nutrient::Sugars,
        threshold: 15.0,
        advice: "Avoid: High sugar for diabetes",
    },
    AdviceRule {
        signal: ProfileSignal::Condition("hypertension"),
        nutrient: Nutrient::Sodium,
        threshold: 500.0,
        advice: "Avoid: High sodium for hypertension",
    },
    AdviceRule {
        signal: ProfileSignal::Goal("weight loss"),
        nutrient: Nutrient::Calories,
        threshold: 400.0,
        advice: "Too many calories for weight loss",
    },
];

/// Returns every advice message whose profile signal and nutrient threshold
/// both hold, in [`ADVICE_RULES`] order.
pub fn advise(nutrients: &NutrientProfile, profile: &UserProfile) -> Vec<String> {
    let conditions = profile.conditions.to_lowercase();
    let goal = profile.goal.to_lowercase();

    ADVICE_RULES
        .iter()
        .filter(|rule| rule.signal.matches(&conditions, &goal))
        .filter(|rule| rule.nutrient.value(nutrients) > rule.threshold)
        .map(|rule| rule.advice.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrients(calories: f64, sugars: f64, sodium: f64) -> NutrientProfile {
        NutrientProfile {
            calories,
            sugars,
            sodium,
            ..NutrientProfile::default()
        }
    }

    #[test]
    fn test_empty_profile_yields_no_advice() {
        let advice = advise(&nutrients(2000.0, 90.0, 4000.0), &UserProfile::default());
        assert!(advice.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_fixed_order() {
        let profile = UserProfile::new("Diabetes, Hypertension", "Weight Loss");
        let advice = advise(&nutrients(500.0, 20.0, 600.0), &profile);
        assert_eq!(
            advice,
            vec![
                "Avoid: High sugar for diabetes",
                "Avoid: High sodium for hypertension",
                "Too many calories for weight loss",
            ]
        );
    }

    #[test]
    fn test_condition_matches_as_substring() {
        let profile = UserProfile::new("type 2 DIABETES mellitus", "");
        let advice = advise(&nutrients(0.0, 16.0, 0.0), &profile);
        assert_eq!(advice, vec!["Avoid: High sugar for diabetes"]);
    }

    #[test]
    fn test_goal_requires_exact_match() {
        let near_misses = ["weight loss ", "lose weight", "weight-loss", "weight loss fast"];
        for goal in near_misses {
            let profile = UserProfile::new("", goal);
            assert!(
                advise(&nutrients(900.0, 0.0, 0.0), &profile).is_empty(),
                "goal {goal:?} should not match"
            );
        }

        let profile = UserProfile::new("", "WEIGHT LOSS");
        assert_eq!(
            advise(&nutrients(900.0, 0.0, 0.0), &profile),
            vec!["Too many calories for weight loss"]
        );
    }

    #[test]
    fn test_signal_without_nutrient_excess_does_not_fire() {
        let profile = UserProfile::new("diabetes hypertension", "weight loss");
        assert!(advise(&nutrients(400.0, 15.0, 500.0), &profile).is_empty());
    }

    #[test]
    fn test_rules_are_independent() {
        let profile = UserProfile::new("diabetes, hypertension", "weight loss");
        let advice = advise(&nutrients(401.0, 0.0, 501.0), &profile);
        assert_eq!(
            advice,
            vec![
                "Avoid: High sodium for hypertension",
                "Too many calories for weight loss",
            ]
        );
    }

    #[test]
    fn test_advice_is_idempotent() {
        let profile = UserProfile::new("Diabetes", "weight loss");
        let n = nutrients(450.0, 22.0, 100.0);
        assert_eq!(advise(&n, &profile), advise(&n, &profile));
    }
}
