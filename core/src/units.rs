//! Unit conversion and normalization module
//!
//! All body measurements are stored in SI units (kg, cm) internally and
//! converted at the input boundary. The conversion factors are exact and
//! must not drift: downstream BMI/TDEE numbers depend on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds per kilogram, exact contract constant
pub const LBS_TO_KG: f64 = 0.453592;

/// Centimeters per inch, exact contract constant
pub const IN_TO_CM: f64 = 2.54;

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * LBS_TO_KG,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / LBS_TO_KG,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Height unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => value * IN_TO_CM,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Inches => cm / IN_TO_CM,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_weight_conversions() {
        // 100 lbs = 45.3592 kg
        let kg = WeightUnit::Lbs.to_kg(100.0);
        assert!((kg - 45.3592).abs() < 0.0001);

        // Kg is the identity
        assert_eq!(WeightUnit::Kg.to_kg(70.0), 70.0);
    }

    #[test]
    fn test_known_height_conversions() {
        // 65 in = 165.1 cm
        let cm = HeightUnit::Inches.to_cm(65.0);
        assert!((cm - 165.1).abs() < 0.0001);

        assert_eq!(HeightUnit::Cm.to_cm(165.0), 165.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip(lbs in 44.0f64..1100.0) {
            let kg = WeightUnit::Lbs.to_kg(lbs);
            let back = WeightUnit::Lbs.from_kg(kg);
            prop_assert!((lbs - back).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", lbs, kg, back);
        }

        /// Property: Height conversion round-trip preserves value
        #[test]
        fn prop_height_roundtrip(inches in 20.0f64..100.0) {
            let cm = HeightUnit::Inches.to_cm(inches);
            let back = HeightUnit::Inches.from_cm(cm);
            prop_assert!((inches - back).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", inches, cm, back);
        }
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kg);
        assert_eq!("lb".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert_eq!("pounds".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert_eq!("in".parse::<HeightUnit>().unwrap(), HeightUnit::Inches);
        assert_eq!("CM".parse::<HeightUnit>().unwrap(), HeightUnit::Cm);
        assert!("stone".parse::<WeightUnit>().is_err());
        assert!("ft".parse::<HeightUnit>().is_err());
    }
}
