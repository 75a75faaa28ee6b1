pub mod types;
pub mod nutrients;
pub mod generator;
pub mod formatters;

pub use types::{NutrientReport, NutrientRow, Severity, WarningCard};

pub use nutrients::nutrient_warnings;

pub use generator::{ReportGenerator, NPK_UNIT};
pub use formatters::MarkdownFormatter;
