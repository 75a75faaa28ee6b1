//! Device Sensor Readings
//!
//! JSON payload published by the field device, one per plant per sample.
//! Every measurement is optional; the probe may be missing or faulty.

use crate::nutrients::{classify_with, Nutrient, NutrientLevel, NutrientStatus, NutrientThresholds};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One sample from the device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub plant_id: String,
    #[serde(default)]
    pub soil_moisture: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub light_intensity: Option<f64>,
    #[serde(default)]
    pub nitrogen: Option<f64>,
    #[serde(default)]
    pub phosphorus: Option<f64>,
    #[serde(default)]
    pub potassium: Option<f64>,
    #[serde(default)]
    pub watering_needed: Option<bool>,
    #[serde(default)]
    pub health_status: Option<String>,
}

impl SensorReading {
    /// Reading carrying only NPK values
    pub fn npk(plant_id: impl Into<String>, nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            plant_id: plant_id.into(),
            nitrogen: Some(nitrogen),
            phosphorus: Some(phosphorus),
            potassium: Some(potassium),
            ..Self::default()
        }
    }

    /// Parse a device payload. Payloads without a plant id are rejected.
    pub fn from_json(payload: &str) -> Result<Self> {
        let reading: SensorReading = serde_json::from_str(payload)
            .context("Failed to parse sensor payload")?;

        if reading.plant_id.trim().is_empty() {
            anyhow::bail!("Sensor payload has no plant_id");
        }

        Ok(reading)
    }

    pub fn value(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    /// Six-flag status, or None unless all three NPK values are present
    pub fn npk_status(&self, thresholds: &NutrientThresholds) -> Option<NutrientStatus> {
        match (self.nitrogen, self.phosphorus, self.potassium) {
            (Some(n), Some(p), Some(k)) => Some(classify_with(thresholds, n, p, k)),
            _ => None,
        }
    }

    /// Level for a single nutrient, None when that value is missing
    pub fn level(&self, nutrient: Nutrient, thresholds: &NutrientThresholds) -> Option<NutrientLevel> {
        self.value(nutrient)
            .map(|v| thresholds.range(nutrient).level(v))
    }
}

/// Classify many readings in parallel, preserving input order
pub fn classify_batch(
    readings: &[SensorReading],
    thresholds: &NutrientThresholds,
) -> Vec<Option<NutrientStatus>> {
    readings
        .par_iter()
        .map(|r| r.npk_status(thresholds))
        .collect()
}
