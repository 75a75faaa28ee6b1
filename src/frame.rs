//! Columnar classification of reading logs
//!
//! Applies the same strict comparisons as `classify_with` to whole columns,
//! appending one boolean column per flag. Null and NaN readings yield false
//! flags; infinities compare like any other value.

use crate::nutrients::{Nutrient, NutrientThresholds};
use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Flag columns appended by `classify_frame`, in `NutrientStatus` field order
pub const FLAG_COLUMNS: [&str; 6] = [
    "low_nitrogen",
    "high_nitrogen",
    "low_phosphorus",
    "high_phosphorus",
    "low_potassium",
    "high_potassium",
];

/// Load a CSV reading log ("NA" read as null)
pub fn load_readings_csv(path: &Path) -> Result<DataFrame> {
    let parse_options = CsvParseOptions::default()
        .with_null_values(Some(NullValues::AllColumnsSingle("NA".into())));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to open readings CSV: {:?}", path))?
        .finish()
        .with_context(|| format!("Failed to parse readings CSV: {:?}", path))?;

    tracing::debug!("Loaded {} readings from {:?}", df.height(), path);

    Ok(df)
}

/// Append the six flag columns to a frame with nitrogen/phosphorus/potassium columns
pub fn classify_frame(df: &DataFrame, thresholds: &NutrientThresholds) -> Result<DataFrame> {
    let mut exprs = Vec::with_capacity(FLAG_COLUMNS.len());

    for nutrient in Nutrient::ALL {
        let key = nutrient.key();
        if df.column(key).is_err() {
            anyhow::bail!("Readings are missing the '{}' column", key);
        }

        let range = thresholds.range(nutrient);
        let reading = col(key).cast(DataType::Float64);
        // Polars orders NaN above every number; NaN raises neither flag
        let is_nan = reading.clone().is_nan();

        exprs.push(
            when(is_nan.clone())
                .then(lit(false))
                .otherwise(reading.clone().lt(lit(range.low())))
                .fill_null(lit(false))
                .alias(format!("low_{}", key)),
        );
        exprs.push(
            when(is_nan)
                .then(lit(false))
                .otherwise(reading.gt(lit(range.high())))
                .fill_null(lit(false))
                .alias(format!("high_{}", key)),
        );
    }

    let out = df
        .clone()
        .lazy()
        .with_columns(exprs)
        .collect()
        .context("Failed to classify readings")?;

    tracing::debug!("Classified {} readings", out.height());

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrients::classify;

    fn flag(df: &DataFrame, name: &str, idx: usize) -> Option<bool> {
        df.column(name).unwrap().bool().unwrap().get(idx)
    }

    #[test]
    fn test_flags_match_scalar_classifier() {
        let rows = [
            (30.0, 5.0, 40.0),
            (150.0, 50.0, 250.0),
            (80.0, 25.0, 100.0),
            (40.0, 10.0, 50.0),
            (f64::NAN, f64::NAN, f64::NAN),
            (f64::INFINITY, f64::NEG_INFINITY, f64::NAN),
            (f64::NEG_INFINITY, f64::INFINITY, 100.0),
        ];
        let df = df! {
            "plant_id" => &["a", "b", "c", "d", "e", "f", "g"],
            "nitrogen" => rows.iter().map(|r| r.0).collect::<Vec<f64>>(),
            "phosphorus" => rows.iter().map(|r| r.1).collect::<Vec<f64>>(),
            "potassium" => rows.iter().map(|r| r.2).collect::<Vec<f64>>()
        }
        .unwrap();

        let out = classify_frame(&df, &NutrientThresholds::default()).unwrap();
        assert_eq!(out.width(), 4 + 6);

        for (idx, (n, p, k)) in rows.iter().enumerate() {
            let s = classify(*n, *p, *k);
            assert_eq!(flag(&out, "low_nitrogen", idx), Some(s.low_nitrogen));
            assert_eq!(flag(&out, "high_nitrogen", idx), Some(s.high_nitrogen));
            assert_eq!(flag(&out, "low_phosphorus", idx), Some(s.low_phosphorus));
            assert_eq!(flag(&out, "high_phosphorus", idx), Some(s.high_phosphorus));
            assert_eq!(flag(&out, "low_potassium", idx), Some(s.low_potassium));
            assert_eq!(flag(&out, "high_potassium", idx), Some(s.high_potassium));
        }
    }

    #[test]
    fn test_null_readings_are_unflagged() {
        let df = df! {
            "nitrogen" => &[None::<f64>, Some(10.0)],
            "phosphorus" => &[None::<f64>, Some(25.0)],
            "potassium" => &[None::<f64>, Some(300.0)]
        }
        .unwrap();

        let out = classify_frame(&df, &NutrientThresholds::default()).unwrap();
        for name in FLAG_COLUMNS {
            assert_eq!(flag(&out, name, 0), Some(false));
        }
        assert_eq!(flag(&out, "low_nitrogen", 1), Some(true));
        assert_eq!(flag(&out, "high_potassium", 1), Some(true));
    }

    #[test]
    fn test_integer_columns_are_cast() {
        let df = df! {
            "nitrogen" => &[39i64, 121],
            "phosphorus" => &[10i64, 41],
            "potassium" => &[50i64, 49]
        }
        .unwrap();

        let out = classify_frame(&df, &NutrientThresholds::default()).unwrap();
        assert_eq!(flag(&out, "low_nitrogen", 0), Some(true));
        assert_eq!(flag(&out, "high_nitrogen", 1), Some(true));
        assert_eq!(flag(&out, "high_phosphorus", 1), Some(true));
        assert_eq!(flag(&out, "low_potassium", 1), Some(true));
    }

    #[test]
    fn test_missing_column() {
        let df = df! {
            "nitrogen" => &[50.0],
            "phosphorus" => &[20.0]
        }
        .unwrap();

        let err = classify_frame(&df, &NutrientThresholds::default()).unwrap_err();
        assert!(err.to_string().contains("potassium"));
    }
}
