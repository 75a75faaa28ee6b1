use crate::explanation::types::NutrientReport;

/// Markdown formatter for nutrient reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &NutrientReport) -> String {
        let mut md = String::with_capacity(512);

        md.push_str(&format!("# Nutrient Levels - {}\n\n", report.plant_id));

        md.push_str("| | Nutrient | Value | Status |\n");
        md.push_str("|---|---|---|---|\n");
        for row in &report.rows {
            let value = match row.value {
                Some(v) => format!("{:.1} {}", v, row.unit),
                None => "—".to_string(),
            };
            let status = row.level.map_or("—", |l| l.display_text());
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.symbol,
                row.nutrient.display_name(),
                value,
                status
            ));
        }
        md.push('\n');

        if report.warnings.is_empty() {
            md.push_str("All measured nutrients are within their normal range.\n");
        } else {
            md.push_str("## Warnings\n\n");
            for warning in &report.warnings {
                md.push_str(&format!("### {} {}\n\n", warning.icon, warning.message));
                md.push_str(&format!("{}  \n", warning.detail));
                md.push_str(&format!("*Advice:* {}\n\n", warning.advice));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::ReportGenerator;
    use crate::readings::SensorReading;

    #[test]
    fn test_balanced_report() {
        let report = ReportGenerator::default().generate(&SensorReading::npk("p1", 80.0, 25.0, 100.0));
        let md = MarkdownFormatter::format(&report);

        assert!(md.starts_with("# Nutrient Levels - p1"));
        assert!(md.contains("| N | Nitrogen | 80.0 mg/kg | Good |"));
        assert!(md.contains("within their normal range"));
        assert!(!md.contains("## Warnings"));
    }

    #[test]
    fn test_missing_value_dash() {
        let reading = SensorReading {
            plant_id: "p2".to_string(),
            potassium: Some(260.0),
            ..SensorReading::default()
        };
        let md = MarkdownFormatter::format(&ReportGenerator::default().generate(&reading));

        assert!(md.contains("| P | Phosphorus | — | — |"));
        assert!(md.contains("| K | Potassium | 260.0 mg/kg | Excess |"));
        assert!(md.contains("## Warnings"));
        assert!(md.contains("Potassium is in excess"));
    }
}
