//! Static food-pair catalog for the food battle
//!
//! Ten fixed pairs bundled with the client. The winner of a pair is the
//! item with the higher health score; ties go to side `a`. That rule is
//! fixed — changing it would break compatibility with recorded results.

use serde::{Deserialize, Serialize};

/// Which side of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A single food entry with its nutrition facts and health score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    /// Calories per serving (kcal)
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    /// Health score, 0-100
    pub score: u8,
    /// Display glyph
    pub emoji: String,
}

/// A head-to-head comparison entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPair {
    pub a: FoodItem,
    pub b: FoodItem,
}

impl FoodPair {
    /// The precomputed ground truth: higher health score wins, ties to `a`
    pub fn winner(&self) -> Side {
        if self.a.score >= self.b.score {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn item(&self, side: Side) -> &FoodItem {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

// ============================================================================
// Health Score Bands
// ============================================================================

/// Display band for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// Classify a 0-100 health score
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 55 {
            ScoreBand::Good
        } else if score >= 35 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
        }
    }

    /// Fixed display color for this band
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#22d87a",
            ScoreBand::Good => "#f5c842",
            ScoreBand::Fair => "#fb923c",
            ScoreBand::Poor => "#f87171",
        }
    }
}

// ============================================================================
// Standard Catalog
// ============================================================================

fn item(
    name: &str,
    calories: i32,
    protein_g: i32,
    carbs_g: i32,
    fat_g: i32,
    score: u8,
    emoji: &str,
) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        score,
        emoji: emoji.to_string(),
    }
}

/// The versioned ten-pair catalog shipped with the client
pub fn standard_pairs() -> Vec<FoodPair> {
    vec![
        FoodPair {
            a: item("Brown Rice", 216, 5, 45, 2, 82, "🍚"),
            b: item("White Rice", 206, 4, 45, 0, 58, "🍙"),
        },
        FoodPair {
            a: item("Greek Yogurt", 100, 17, 6, 1, 91, "🥛"),
            b: item("Flavored Yogurt", 170, 6, 31, 2, 45, "🍦"),
        },
        FoodPair {
            a: item("Almonds (30g)", 173, 6, 6, 15, 88, "🌰"),
            b: item("Potato Chips (30g)", 152, 2, 15, 10, 22, "🥔"),
        },
        FoodPair {
            a: item("Grilled Chicken", 165, 31, 0, 4, 95, "🍗"),
            b: item("Fried Chicken", 320, 22, 18, 19, 38, "🍖"),
        },
        FoodPair {
            a: item("Sweet Potato", 86, 2, 20, 0, 87, "🍠"),
            b: item("French Fries", 312, 4, 41, 15, 25, "🍟"),
        },
        FoodPair {
            a: item("Avocado Toast", 290, 8, 28, 17, 79, "🥑"),
            b: item("Buttered Toast", 315, 7, 36, 16, 42, "🍞"),
        },
        FoodPair {
            a: item("Oat Porridge", 150, 5, 27, 3, 84, "🌾"),
            b: item("Frosted Flakes", 148, 2, 36, 0, 28, "🥣"),
        },
        FoodPair {
            a: item("Salmon Fillet", 208, 29, 0, 10, 93, "🐟"),
            b: item("Fish & Chips", 520, 25, 52, 24, 31, "🍽️"),
        },
        FoodPair {
            a: item("Dark Chocolate", 170, 2, 13, 12, 71, "🍫"),
            b: item("Milk Chocolate", 210, 3, 25, 12, 44, "🍬"),
        },
        FoodPair {
            a: item("Sparkling Water", 0, 0, 0, 0, 100, "💧"),
            b: item("Cola (330ml)", 139, 0, 35, 0, 10, "🥤"),
        },
    ]
}
