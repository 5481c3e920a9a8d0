//! Body metrics calculations module
//!
//! Provides the BMI / TDEE / macro-target pipeline that turns a body
//! profile into daily calorie and macronutrient goals.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Validate First**: Inputs are checked before any formula runs,
//!    so NaN never propagates into results
//! 3. **Type Safety**: Strong typing prevents unit confusion

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::{validate_age_years, validate_height_cm, validate_weight_kg};

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used as a formula branch only, not a judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    Very,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Very => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::Very => "Very hard exercise or physical job",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very" => Ok(ActivityLevel::Very),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Profile data needed for the body-metrics pipeline (stored in SI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    /// Biological sex for physiological calculations
    pub sex: Sex,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Weight goal for calorie adjustment
    pub goal: Goal,
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Fixed display color for this category. Part of the contract for
    /// consumers that need a consistent category-to-color mapping.
    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#3b82f6",
            BmiCategory::Healthy => "#22d87a",
            BmiCategory::Overweight => "#f97316",
            BmiCategory::Obese => "#ef4444",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Precondition: `height_cm > 0`. Callers must validate inputs first;
/// [`compute_metrics`] does this for the full pipeline.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// Boundary values belong to the higher band: a BMI of exactly 25.0 is
/// Overweight, not Healthy.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Healthy
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure, rounded to whole kcal
///
/// TDEE = BMR × activity multiplier
pub fn compute_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
    activity_level: ActivityLevel,
) -> i32 {
    let bmr = compute_bmr(weight_kg, height_cm, age_years, sex);
    (bmr * activity_level.multiplier()).round() as i32
}

/// Adjust maintenance calories for the weight goal
///
/// Lose: 500 kcal deficit; gain: 300 kcal surplus; maintain: unchanged.
pub fn goal_calories(tdee: i32, goal: Goal) -> i32 {
    match goal {
        Goal::Lose => tdee - 500,
        Goal::Gain => tdee + 300,
        Goal::Maintain => tdee,
    }
}

// ============================================================================
// Macro Targets
// ============================================================================

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_g: i32,
    pub fat_g: i32,
    pub carbs_g: i32,
}

/// Derive macro targets from weight and the goal calorie budget
///
/// Protein: 1.8 g/kg body weight. Fat: 25% of calories at 9 kcal/g.
/// Carbs: whatever calories remain at 4 kcal/g, clamped to 0 — extreme
/// low-calorie/high-weight inputs would otherwise go negative.
pub fn compute_macros(weight_kg: f64, goal_kcal: i32) -> MacroSplit {
    let protein_g = (weight_kg * 1.8).round() as i32;
    let fat_g = (goal_kcal as f64 * 0.25 / 9.0).round() as i32;
    let carbs_g =
        (((goal_kcal - protein_g * 4 - fat_g * 9) as f64) / 4.0).round() as i32;
    MacroSplit {
        protein_g,
        fat_g,
        carbs_g: carbs_g.max(0),
    }
}

// ============================================================================
// Full Pipeline
// ============================================================================

/// Body-metrics result, immutable once computed
///
/// Superseded by recomputation, never patched. Serializable so it can be
/// persisted verbatim next to the originating profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetricsResult {
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// Category derived solely from BMI thresholds
    pub category: BmiCategory,
    /// Maintenance calories (kcal/day)
    pub tdee: i32,
    /// Goal-adjusted calorie target (kcal/day)
    pub goal_kcal: i32,
    /// Daily macro targets
    pub macros: MacroSplit,
}

/// Run the full pipeline: validate, then derive BMI, TDEE, goal calories
/// and macro targets from a profile.
pub fn compute_metrics(profile: &BodyProfile) -> Result<BodyMetricsResult, ValidationError> {
    validate_weight_kg(profile.weight_kg)?;
    validate_height_cm(profile.height_cm)?;
    validate_age_years(profile.age_years)?;

    let bmi = compute_bmi(profile.weight_kg, profile.height_cm);
    let tdee = compute_tdee(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        profile.activity_level,
    );
    let goal_kcal = goal_calories(tdee, profile.goal);
    let macros = compute_macros(profile.weight_kg, goal_kcal);

    Ok(BodyMetricsResult {
        bmi: (bmi * 10.0).round() / 10.0,
        category: classify_bmi(bmi),
        tdee,
        goal_kcal,
        macros,
    })
}
