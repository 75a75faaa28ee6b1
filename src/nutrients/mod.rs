//! NPK classification
//!
//! - `thresholds`: band constants and validated ranges
//! - `level`: nutrient identity and Low/Good/Excess view
//! - `classifier`: the six-flag comparator

pub mod classifier;
pub mod level;
pub mod thresholds;

pub use classifier::{classify, classify_with, NutrientStatus};
pub use level::{Nutrient, NutrientLevel};
pub use thresholds::{NutrientRange, NutrientThresholds, ThresholdError};
