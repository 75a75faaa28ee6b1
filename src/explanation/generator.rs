use crate::explanation::nutrients::nutrient_warnings;
use crate::explanation::types::{NutrientReport, NutrientRow};
use crate::nutrients::{Nutrient, NutrientThresholds};
use crate::readings::SensorReading;

/// Unit reported by the NPK probe
pub const NPK_UNIT: &str = "mg/kg";

/// Builds nutrient reports against a fixed set of bands
pub struct ReportGenerator {
    thresholds: NutrientThresholds,
}

impl ReportGenerator {
    pub fn new(thresholds: NutrientThresholds) -> Self {
        Self { thresholds }
    }

    pub fn generate(&self, reading: &SensorReading) -> NutrientReport {
        let rows = Nutrient::ALL
            .iter()
            .map(|&nutrient| NutrientRow {
                nutrient,
                symbol: nutrient.symbol().to_string(),
                value: reading.value(nutrient),
                unit: NPK_UNIT.to_string(),
                level: reading.level(nutrient, &self.thresholds),
            })
            .collect();

        NutrientReport {
            plant_id: reading.plant_id.clone(),
            rows,
            warnings: nutrient_warnings(reading, &self.thresholds),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(NutrientThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrients::NutrientLevel;

    #[test]
    fn test_rows_in_npk_order() {
        let r = SensorReading::npk("bed-3", 150.0, 25.0, 40.0);
        let report = ReportGenerator::default().generate(&r);

        assert_eq!(report.plant_id, "bed-3");
        let symbols: Vec<&str> = report.rows.iter().map(|row| row.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["N", "P", "K"]);

        assert_eq!(report.rows[0].level, Some(NutrientLevel::Excess));
        assert_eq!(report.rows[1].level, Some(NutrientLevel::Good));
        assert_eq!(report.rows[2].level, Some(NutrientLevel::Low));
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_missing_row_has_no_level() {
        let r = SensorReading {
            plant_id: "bed-1".to_string(),
            nitrogen: Some(80.0),
            ..SensorReading::default()
        };
        let report = ReportGenerator::default().generate(&r);

        assert_eq!(report.rows[1].value, None);
        assert_eq!(report.rows[1].level, None);
        assert!(report.warnings.is_empty());
    }
}
