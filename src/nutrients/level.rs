//! Nutrient identity and the three-state level view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macronutrient measured by the NPK probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// N, P, K order
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    pub fn symbol(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "N",
            Nutrient::Phosphorus => "P",
            Nutrient::Potassium => "K",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
        }
    }

    /// Lowercase key used in JSON payloads and column names
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "nitrogen",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Where a reading sits relative to its normal band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientLevel {
    /// Below the low bound (deficient)
    Low,

    /// Within the band, bounds included
    Good,

    /// Above the high bound
    Excess,
}

impl NutrientLevel {
    pub fn display_text(&self) -> &'static str {
        match self {
            NutrientLevel::Low => "Low",
            NutrientLevel::Good => "Good",
            NutrientLevel::Excess => "Excess",
        }
    }

    pub fn is_out_of_band(&self) -> bool {
        !matches!(self, NutrientLevel::Good)
    }
}
