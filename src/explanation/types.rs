use serde::{Deserialize, Serialize};
use crate::explanation::formatters::MarkdownFormatter;
use crate::explanation::generator::ReportGenerator;
use crate::nutrients::{Nutrient, NutrientLevel, NutrientThresholds};
use crate::readings::SensorReading;

/// Nutrient report for a single reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientReport {
    pub plant_id: String,
    pub rows: Vec<NutrientRow>,
    pub warnings: Vec<WarningCard>,
}

impl NutrientReport {
    pub fn from_reading(reading: &SensorReading, thresholds: &NutrientThresholds) -> Self {
        ReportGenerator::new(*thresholds).generate(reading)
    }

    pub fn to_markdown(&self) -> String {
        MarkdownFormatter::format(self)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One line of the NPK table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientRow {
    pub nutrient: Nutrient,
    pub symbol: String, // "N"
    pub value: Option<f64>,
    pub unit: String,   // "mg/kg"
    pub level: Option<NutrientLevel>,
}

/// Warning card for an out-of-band nutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningCard {
    pub warning_type: String, // "nitrogen_deficient", "potassium_excess"
    pub severity: Severity,
    pub icon: String, // "⚠️", "🚨"
    pub message: String,
    pub detail: String,
    pub advice: String,
}

/// Severity level for warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Medium,
    High,
}

impl Severity {
    /// Derive severity from how far a reading sits outside its band,
    /// as a fraction of the band width
    pub fn from_distance_fraction(fraction: f64) -> Self {
        match fraction {
            f if f > 0.5 => Severity::High,
            f if f > 0.0 => Severity::Medium,
            _ => Severity::None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::High => "🚨",
            Severity::Medium => "⚠️",
            Severity::None => "ℹ️",
        }
    }
}
