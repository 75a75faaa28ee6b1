//! NPK Nutrient Rules
//!
//! Classifies soil nitrogen, phosphorus and potassium readings (mg/kg) against
//! fixed bands, producing low/high flags per nutrient.
//!
//! - `nutrients/`: thresholds, levels and the six-flag classifier
//! - `readings`: device payloads and parallel batch classification
//! - `frame`: Polars classification of CSV reading logs
//! - `explanation/`: warning cards and Markdown/JSON nutrient reports

pub mod nutrients;
pub mod readings;
pub mod frame;
pub mod explanation;

// Re-export commonly used types
pub use nutrients::{
    classify, classify_with, Nutrient, NutrientLevel, NutrientRange, NutrientStatus,
    NutrientThresholds, ThresholdError,
};
pub use readings::{classify_batch, SensorReading};
pub use frame::{classify_frame, load_readings_csv};
