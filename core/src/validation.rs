//! Input validation and the form parse boundary
//!
//! Raw user input arrives as strings; this module turns it into a typed
//! [`BodyProfile`] or a [`ValidationError`], so no formula ever sees an
//! empty string or a NaN.

use serde::{Deserialize, Serialize};

use crate::body_metrics::{ActivityLevel, BodyProfile, Goal, Sex};
use crate::errors::ValidationError;
use crate::units::{HeightUnit, WeightUnit};

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(ValidationError::new("weight", "must be a valid number"));
    }
    if weight_kg < 20.0 {
        return Err(ValidationError::new("weight", "must be at least 20 kg"));
    }
    if weight_kg > 500.0 {
        return Err(ValidationError::new("weight", "must be at most 500 kg"));
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err(ValidationError::new("height", "must be a valid number"));
    }
    if height_cm < 50.0 {
        return Err(ValidationError::new("height", "must be at least 50 cm"));
    }
    if height_cm > 300.0 {
        return Err(ValidationError::new("height", "must be at most 300 cm"));
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: i32) -> Result<(), ValidationError> {
    if age_years < 1 {
        return Err(ValidationError::new("age", "must be at least 1 year"));
    }
    if age_years > 150 {
        return Err(ValidationError::new("age", "cannot exceed 150 years"));
    }
    Ok(())
}

// ============================================================================
// Form Parsing
// ============================================================================

/// Raw body-goals form state, exactly as collected from the UI
///
/// Every field is a free-form string; [`BodyGoalsForm::parse`] is the single
/// place where they become typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyGoalsForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub weight_unit: String,
    pub height_unit: String,
    pub sex: String,
    pub activity: String,
    pub goal: String,
}

impl Default for BodyGoalsForm {
    fn default() -> Self {
        Self {
            weight: "55".to_string(),
            height: "165".to_string(),
            age: "20".to_string(),
            weight_unit: "kg".to_string(),
            height_unit: "cm".to_string(),
            sex: "female".to_string(),
            activity: "moderate".to_string(),
            goal: "maintain".to_string(),
        }
    }
}

impl BodyGoalsForm {
    /// Parse and normalize the form into a typed profile
    ///
    /// Weight and height are converted to SI units here. Non-numeric or
    /// out-of-range values are rejected explicitly rather than silently
    /// no-oping. An unrecognized activity level falls back to sedentary
    /// (multiplier 1.2) and an unrecognized goal to maintain, preserving
    /// the lenient lookup the calorie formulas were tuned against.
    pub fn parse(&self) -> Result<BodyProfile, ValidationError> {
        let weight_unit: WeightUnit = self
            .weight_unit
            .parse()
            .map_err(|e: String| ValidationError::new("weight_unit", e))?;
        let height_unit: HeightUnit = self
            .height_unit
            .parse()
            .map_err(|e: String| ValidationError::new("height_unit", e))?;

        let weight = parse_positive_number(&self.weight, "weight")?;
        let height = parse_positive_number(&self.height, "height")?;
        let age_years: i32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| ValidationError::new("age", "must be a whole number"))?;

        let weight_kg = weight_unit.to_kg(weight);
        let height_cm = height_unit.to_cm(height);

        validate_weight_kg(weight_kg)?;
        validate_height_cm(height_cm)?;
        validate_age_years(age_years)?;

        let sex: Sex = self
            .sex
            .parse()
            .map_err(|e: String| ValidationError::new("sex", e))?;
        let activity_level: ActivityLevel = self.activity.parse().unwrap_or_default();
        let goal: Goal = self.goal.parse().unwrap_or_default();

        Ok(BodyProfile {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level,
            goal,
        })
    }
}

fn parse_positive_number(raw: &str, field: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::new(field, "must be a number"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new(field, "must be a positive number"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(-10.0).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age_years() {
        assert!(validate_age_years(20).is_ok());
        assert!(validate_age_years(1).is_ok());
        assert!(validate_age_years(150).is_ok());
        assert!(validate_age_years(0).is_err());
        assert!(validate_age_years(-5).is_err());
        assert!(validate_age_years(151).is_err());
    }

    #[test]
    fn test_parse_default_form() {
        let profile = BodyGoalsForm::default().parse().unwrap();
        assert_eq!(profile.weight_kg, 55.0);
        assert_eq!(profile.height_cm, 165.0);
        assert_eq!(profile.age_years, 20);
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Maintain);
    }

    #[test]
    fn test_parse_converts_imperial_units() {
        let form = BodyGoalsForm {
            weight: "150".to_string(),
            height: "65".to_string(),
            weight_unit: "lbs".to_string(),
            height_unit: "in".to_string(),
            ..Default::default()
        };
        let profile = form.parse().unwrap();
        assert!((profile.weight_kg - 68.0388).abs() < 0.0001);
        assert!((profile.height_cm - 165.1).abs() < 0.0001);
    }

    #[test]
    fn test_parse_rejects_non_numeric_input() {
        for bad in ["", "  ", "abc", "12abc", "NaN", "-70"] {
            let form = BodyGoalsForm {
                weight: bad.to_string(),
                ..Default::default()
            };
            assert!(form.parse().is_err(), "weight {:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_sex_and_units() {
        let form = BodyGoalsForm {
            sex: "other".to_string(),
            ..Default::default()
        };
        assert_eq!(form.parse().unwrap_err().field, "sex");

        let form = BodyGoalsForm {
            weight_unit: "stone".to_string(),
            ..Default::default()
        };
        assert_eq!(form.parse().unwrap_err().field, "weight_unit");
    }

    #[test]
    fn test_parse_defaults_unknown_activity_and_goal() {
        let form = BodyGoalsForm {
            activity: "super_active".to_string(),
            goal: "bulk".to_string(),
            ..Default::default()
        };
        let profile = form.parse().unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(profile.goal, Goal::Maintain);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        /// Property: any parse success yields a profile that passes the
        /// range validators (no NaN can sneak through the boundary)
        #[test]
        fn prop_parsed_profile_is_valid(weight in 20.0f64..500.0, height in 50.0f64..300.0) {
            let form = BodyGoalsForm {
                weight: format!("{:.1}", weight),
                height: format!("{:.1}", height),
                ..Default::default()
            };
            let profile = form.parse().unwrap();
            prop_assert!(validate_weight_kg(profile.weight_kg).is_ok());
            prop_assert!(validate_height_cm(profile.height_cm).is_ok());
        }
    }
}
