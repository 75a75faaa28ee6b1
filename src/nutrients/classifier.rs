//! NPK Classifier
//!
//! Flags each nutrient reading as low or high against its band using six
//! independent strict comparisons. A reading sitting exactly on a bound is in
//! the normal band.
//!
//! Non-finite readings follow IEEE comparison semantics: NaN raises neither
//! flag, `+inf` raises only the high flag, `-inf` only the low flag.

use super::level::{Nutrient, NutrientLevel};
use super::thresholds::NutrientThresholds;
use serde::{Deserialize, Serialize};

/// Low/high flags for nitrogen, phosphorus and potassium.
///
/// There is no "normal" flag: both flags false means the reading is in band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NutrientStatus {
    pub low_nitrogen: bool,
    pub high_nitrogen: bool,
    pub low_phosphorus: bool,
    pub high_phosphorus: bool,
    pub low_potassium: bool,
    pub high_potassium: bool,
}

impl NutrientStatus {
    pub fn is_low(&self, nutrient: Nutrient) -> bool {
        match nutrient {
            Nutrient::Nitrogen => self.low_nitrogen,
            Nutrient::Phosphorus => self.low_phosphorus,
            Nutrient::Potassium => self.low_potassium,
        }
    }

    pub fn is_high(&self, nutrient: Nutrient) -> bool {
        match nutrient {
            Nutrient::Nitrogen => self.high_nitrogen,
            Nutrient::Phosphorus => self.high_phosphorus,
            Nutrient::Potassium => self.high_potassium,
        }
    }

    pub fn level(&self, nutrient: Nutrient) -> NutrientLevel {
        if self.is_low(nutrient) {
            NutrientLevel::Low
        } else if self.is_high(nutrient) {
            NutrientLevel::Excess
        } else {
            NutrientLevel::Good
        }
    }

    /// All three nutrients in band
    pub fn is_balanced(&self) -> bool {
        *self == NutrientStatus::default()
    }

    /// Out-of-band nutrients in N, P, K order
    pub fn flagged(&self) -> Vec<(Nutrient, NutrientLevel)> {
        Nutrient::ALL
            .iter()
            .map(|&n| (n, self.level(n)))
            .filter(|(_, level)| level.is_out_of_band())
            .collect()
    }
}

/// Classify readings (mg/kg) against the default bands.
///
/// | flag | condition |
/// |---|---|
/// | low_nitrogen | nitrogen < 40 |
/// | high_nitrogen | nitrogen > 120 |
/// | low_phosphorus | phosphorus < 10 |
/// | high_phosphorus | phosphorus > 40 |
/// | low_potassium | potassium < 50 |
/// | high_potassium | potassium > 200 |
#[inline]
pub fn classify(nitrogen: f64, phosphorus: f64, potassium: f64) -> NutrientStatus {
    classify_with(&NutrientThresholds::DEFAULT, nitrogen, phosphorus, potassium)
}

/// Classify readings against caller-supplied bands
#[inline]
pub fn classify_with(
    thresholds: &NutrientThresholds,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
) -> NutrientStatus {
    NutrientStatus {
        low_nitrogen: thresholds.nitrogen.is_low(nitrogen),
        high_nitrogen: thresholds.nitrogen.is_high(nitrogen),
        low_phosphorus: thresholds.phosphorus.is_low(phosphorus),
        high_phosphorus: thresholds.phosphorus.is_high(phosphorus),
        low_potassium: thresholds.potassium.is_low(potassium),
        high_potassium: thresholds.potassium.is_high(potassium),
    }
}
