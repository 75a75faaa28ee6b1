//! NPK Threshold Bands
//!
//! Fixed low/high bounds (mg/kg) for nitrogen, phosphorus and potassium, plus an
//! optional JSON override for deployments that calibrate their own bands.

use super::level::{Nutrient, NutrientLevel};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Default bounds
// ============================================================================

/// Nitrogen below this is deficient
pub const NITROGEN_LOW: f64 = 40.0;
/// Nitrogen above this is excess
pub const NITROGEN_HIGH: f64 = 120.0;

/// Phosphorus below this is deficient
pub const PHOSPHORUS_LOW: f64 = 10.0;
/// Phosphorus above this is excess
pub const PHOSPHORUS_HIGH: f64 = 40.0;

/// Potassium below this is deficient
pub const POTASSIUM_LOW: f64 = 50.0;
/// Potassium above this is excess
pub const POTASSIUM_HIGH: f64 = 200.0;

/// Rejected threshold band
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold bounds must be finite (low: {low}, high: {high})")]
    NonFinite { low: f64, high: f64 },

    #[error("low bound {low} must be strictly below high bound {high}")]
    Inverted { low: f64, high: f64 },
}

/// Normal band for a single nutrient.
///
/// Both bounds are finite and `low < high`, so a reading can never be flagged
/// low and high at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct NutrientRange {
    low: f64,
    high: f64,
}

#[derive(Deserialize)]
struct RawRange {
    low: f64,
    high: f64,
}

impl TryFrom<RawRange> for NutrientRange {
    type Error = ThresholdError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        NutrientRange::new(raw.low, raw.high)
    }
}

impl NutrientRange {
    pub const NITROGEN: NutrientRange = NutrientRange { low: NITROGEN_LOW, high: NITROGEN_HIGH };
    pub const PHOSPHORUS: NutrientRange = NutrientRange { low: PHOSPHORUS_LOW, high: PHOSPHORUS_HIGH };
    pub const POTASSIUM: NutrientRange = NutrientRange { low: POTASSIUM_LOW, high: POTASSIUM_HIGH };

    pub fn new(low: f64, high: f64) -> Result<Self, ThresholdError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ThresholdError::NonFinite { low, high });
        }
        if low >= high {
            return Err(ThresholdError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Strictly below the band
    #[inline]
    pub fn is_low(&self, value: f64) -> bool {
        value < self.low
    }

    /// Strictly above the band
    #[inline]
    pub fn is_high(&self, value: f64) -> bool {
        value > self.high
    }

    /// Three-state view of a reading. Bounds themselves are Good; NaN is Good
    /// because it fails both strict comparisons.
    pub fn level(&self, value: f64) -> NutrientLevel {
        if self.is_low(value) {
            NutrientLevel::Low
        } else if self.is_high(value) {
            NutrientLevel::Excess
        } else {
            NutrientLevel::Good
        }
    }

    /// Distance beyond the nearest bound as a fraction of the band width.
    /// 0.0 inside the band.
    pub fn distance_fraction(&self, value: f64) -> f64 {
        let width = self.high - self.low;
        let distance = if self.is_low(value) {
            self.low - value
        } else if self.is_high(value) {
            value - self.high
        } else {
            0.0
        };
        distance / width
    }
}

/// Bands for all three nutrients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientThresholds {
    #[serde(default = "default_nitrogen")]
    pub nitrogen: NutrientRange,
    #[serde(default = "default_phosphorus")]
    pub phosphorus: NutrientRange,
    #[serde(default = "default_potassium")]
    pub potassium: NutrientRange,
}

fn default_nitrogen() -> NutrientRange {
    NutrientRange::NITROGEN
}

fn default_phosphorus() -> NutrientRange {
    NutrientRange::PHOSPHORUS
}

fn default_potassium() -> NutrientRange {
    NutrientRange::POTASSIUM
}

impl Default for NutrientThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl NutrientThresholds {
    pub const DEFAULT: NutrientThresholds = NutrientThresholds {
        nitrogen: NutrientRange::NITROGEN,
        phosphorus: NutrientRange::PHOSPHORUS,
        potassium: NutrientRange::POTASSIUM,
    };

    pub fn range(&self, nutrient: Nutrient) -> &NutrientRange {
        match nutrient {
            Nutrient::Nitrogen => &self.nitrogen,
            Nutrient::Phosphorus => &self.phosphorus,
            Nutrient::Potassium => &self.potassium,
        }
    }

    /// Load thresholds from a JSON file.
    ///
    /// Nutrients absent from the file keep their default band.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read thresholds file: {:?}", path))?;

        let thresholds: NutrientThresholds = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse thresholds JSON: {:?}", path))?;

        tracing::debug!(
            "Loaded NPK thresholds from {:?}: N {}-{}, P {}-{}, K {}-{}",
            path,
            thresholds.nitrogen.low,
            thresholds.nitrogen.high,
            thresholds.phosphorus.low,
            thresholds.phosphorus.high,
            thresholds.potassium.low,
            thresholds.potassium.high,
        );

        Ok(thresholds)
    }
}
