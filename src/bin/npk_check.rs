// NPK check CLI
//
// Usage:
//   npk_check <nitrogen> <phosphorus> <potassium> [--json]
//   npk_check --csv <readings.csv>
//
// NPK_THRESHOLDS=<file.json> overrides the default bands.

use anyhow::{Context, Result};
use nutrient_rules::explanation::NutrientReport;
use nutrient_rules::{classify_frame, load_readings_csv, NutrientThresholds, SensorReading};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: npk_check <nitrogen> <phosphorus> <potassium> [--json] | --csv <file>";

#[derive(Debug, PartialEq)]
enum Command {
    /// Report for a single reading
    Single {
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        json: bool,
    },
    /// Classify a CSV reading log
    Csv(PathBuf),
}

fn parse_reading(name: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .with_context(|| format!("Invalid {} reading: '{}'", name, raw))
}

fn parse_args(args: &[String]) -> Result<Command> {
    if args.first().map(String::as_str) == Some("--csv") {
        let path = args.get(1).context("--csv requires a file path")?;
        return Ok(Command::Csv(PathBuf::from(path)));
    }

    let json = args.iter().any(|a| a == "--json");
    let values: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    if values.len() != 3 {
        anyhow::bail!("expected 3 readings, got {}\n{}", values.len(), USAGE);
    }

    Ok(Command::Single {
        nitrogen: parse_reading("nitrogen", values[0])?,
        phosphorus: parse_reading("phosphorus", values[1])?,
        potassium: parse_reading("potassium", values[2])?,
        json,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutrient_rules=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let thresholds = match std::env::var("NPK_THRESHOLDS") {
        Ok(path) => {
            tracing::info!("Using thresholds from {}", path);
            NutrientThresholds::load(Path::new(&path))?
        }
        Err(_) => NutrientThresholds::default(),
    };

    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args)? {
        Command::Csv(path) => {
            let df = load_readings_csv(&path)?;
            let classified = classify_frame(&df, &thresholds)?;
            tracing::info!("Classified {} readings from {:?}", classified.height(), path);
            println!("{}", classified);
        }
        Command::Single { nitrogen, phosphorus, potassium, json } => {
            let reading = SensorReading::npk("cli", nitrogen, phosphorus, potassium);
            let report = NutrientReport::from_reading(&reading, &thresholds);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_markdown());
            }
        }
    }

    Ok(())
}
