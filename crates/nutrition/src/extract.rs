//! Maps raw upstream nutriment records onto [`NutrientProfile`].

use serde_json::{Map, Value};

use crate::model::NutrientProfile;

pub const CALORIES_KEY: &str = "energy-kcal_100g";
pub const SUGARS_KEY: &str = "sugars_100g";
pub const SATURATED_FAT_KEY: &str = "saturated-fat_100g";
pub const SODIUM_KEY: &str = "sodium_100g";
pub const PROTEIN_KEY: &str = "proteins_100g";

/// Reads the five per-100g fields, substituting 0 for anything absent or null.
pub fn extract_nutrients(nutriments: &Map<String, Value>) -> NutrientProfile {
    NutrientProfile {
        calories: read(nutriments, CALORIES_KEY),
        sugars: read(nutriments, SUGARS_KEY),
        saturated_fat: read(nutriments, SATURATED_FAT_KEY),
        sodium: read(nutriments, SODIUM_KEY),
        protein: read(nutriments, PROTEIN_KEY),
    }
}

// Upstream occasionally encodes numbers as strings.
fn read(nutriments: &Map<String, Value>, key: &str) -> f64 {
    match nutriments.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_reads_all_five_fields() {
        let nutriments = map(json!({
            "energy-kcal_100g": 539,
            "sugars_100g": 56.3,
            "saturated-fat_100g": 10.6,
            "sodium_100g": 0.0428,
            "proteins_100g": 6.3,
            "fat_100g": 30.9
        }));

        let profile = extract_nutrients(&nutriments);
        assert_eq!(profile.calories, 539.0);
        assert_eq!(profile.sugars, 56.3);
        assert_eq!(profile.saturated_fat, 10.6);
        assert_eq!(profile.sodium, 0.0428);
        assert_eq!(profile.protein, 6.3);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let profile = extract_nutrients(&Map::new());
        assert_eq!(profile, NutrientProfile::default());
    }

    #[test]
    fn test_null_fields_default_to_zero() {
        let nutriments = map(json!({
            "energy-kcal_100g": null,
            "sugars_100g": 12
        }));

        let profile = extract_nutrients(&nutriments);
        assert_eq!(profile.calories, 0.0);
        assert_eq!(profile.sugars, 12.0);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let nutriments = map(json!({ "sodium_100g": -3.5 }));
        assert_eq!(extract_nutrients(&nutriments).sodium, -3.5);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let nutriments = map(json!({
            "proteins_100g": "8.1",
            "sugars_100g": "traces"
        }));

        let profile = extract_nutrients(&nutriments);
        assert_eq!(profile.protein, 8.1);
        assert_eq!(profile.sugars, 0.0);
    }

    #[test]
    fn test_similarly_named_keys_are_ignored() {
        let nutriments = map(json!({
            "energy-kcal": 900,
            "energy_100g": 2255,
            "sugars_serving": 40
        }));

        assert_eq!(extract_nutrients(&nutriments), NutrientProfile::default());
    }
}
