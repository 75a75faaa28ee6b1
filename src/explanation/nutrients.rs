use crate::explanation::types::{Severity, WarningCard};
use crate::nutrients::{Nutrient, NutrientLevel, NutrientThresholds};
use crate::readings::SensorReading;

/// Check each NPK value of a reading against its band
///
/// Returns one warning per deficient or excess nutrient, in N, P, K order.
/// Missing values produce no warning.
pub fn nutrient_warnings(reading: &SensorReading, thresholds: &NutrientThresholds) -> Vec<WarningCard> {
    Nutrient::ALL
        .iter()
        .filter_map(|&nutrient| {
            let value = reading.value(nutrient)?;
            let range = thresholds.range(nutrient);

            let severity = Severity::from_distance_fraction(range.distance_fraction(value));
            let name = nutrient.display_name();

            match range.level(value) {
                NutrientLevel::Good => None,
                NutrientLevel::Low => Some(WarningCard {
                    warning_type: format!("{}_deficient", nutrient.key()),
                    severity,
                    icon: severity.icon().to_string(),
                    message: format!("{} is deficient", name),
                    detail: format!(
                        "{}: {:.1} mg/kg (normal: {:.0}-{:.0} mg/kg)",
                        name, value, range.low(), range.high()
                    ),
                    advice: deficiency_advice(nutrient).to_string(),
                }),
                NutrientLevel::Excess => Some(WarningCard {
                    warning_type: format!("{}_excess", nutrient.key()),
                    severity,
                    icon: severity.icon().to_string(),
                    message: format!("{} is in excess", name),
                    detail: format!(
                        "{}: {:.1} mg/kg (normal: {:.0}-{:.0} mg/kg)",
                        name, value, range.low(), range.high()
                    ),
                    advice: "Suspend fertilization; leach with irrigation or dilute with fresh substrate".to_string(),
                }),
            }
        })
        .collect()
}

fn deficiency_advice(nutrient: Nutrient) -> &'static str {
    match nutrient {
        Nutrient::Nitrogen => "Apply a nitrogen fertilizer (e.g. compost, blood meal or urea) at the next feed",
        Nutrient::Phosphorus => "Apply a phosphorus fertilizer (e.g. bone meal or superphosphate)",
        Nutrient::Potassium => "Apply a potassium fertilizer (e.g. potash or wood ash)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_reading_has_no_warnings() {
        let r = SensorReading::npk("p1", 80.0, 25.0, 100.0);
        assert!(nutrient_warnings(&r, &NutrientThresholds::default()).is_empty());
    }

    #[test]
    fn test_deficient_and_excess() {
        // N 30: 10 below a width-80 band (0.125) -> Medium
        // K 500: 300 above a width-150 band (2.0) -> High
        let r = SensorReading::npk("p1", 30.0, 25.0, 500.0);
        let warnings = nutrient_warnings(&r, &NutrientThresholds::default());

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].warning_type, "nitrogen_deficient");
        assert_eq!(warnings[0].severity, Severity::Medium);
        assert!(warnings[0].detail.contains("40-120"));

        assert_eq!(warnings[1].warning_type, "potassium_excess");
        assert_eq!(warnings[1].severity, Severity::High);
        assert_eq!(warnings[1].icon, "🚨");
    }

    #[test]
    fn test_missing_values_skipped() {
        let r = SensorReading {
            plant_id: "p1".to_string(),
            phosphorus: Some(2.0),
            ..SensorReading::default()
        };
        let warnings = nutrient_warnings(&r, &NutrientThresholds::default());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].warning_type, "phosphorus_deficient");
    }
}
