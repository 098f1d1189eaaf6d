use chrono::NaiveDateTime;
use clap::Parser;
use csv::Reader;
use scale_core::analyzer::analyzer::Analyzer;
use scale_core::common::enums::WeightUnit;
use scale_core::common::func_util::format_weight;
use scale_core::config::trend_settings::TrendSettings;
use scale_core::daily::daily_average::DailyAverage;
use scale_core::entry::entry::Entry;
use scale_core::trend::trend_bands::TrendBands;
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Analyze weight history CSV files
#[derive(Debug, Parser)]
#[command(name = "scale_cli")]
struct Cli {
    /// CSV files or directories containing them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// JSON file with trend settings overrides
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Directory for chart-ready JSON output
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug)]
struct CsvRecord {
    timestamp: NaiveDateTime,
    value: f64,
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChartData<'a> {
    daily_averages: &'a [DailyAverage],
    bands: Option<TrendBands>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scale_cli=info,scale_core=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.settings.as_deref())?;

    for path in collect_csv_files(&cli.paths)? {
        println!("Processing file: {:?}", path);
        process_csv_file(&path, &settings, cli.out.as_deref())?;
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<TrendSettings, Box<dyn Error>> {
    let conf = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Some(serde_json::from_str::<HashMap<String, serde_json::Value>>(&raw)?)
        }
        None => None,
    };
    Ok(TrendSettings::from_map(conf)?)
}

fn collect_csv_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in std::fs::read_dir(path)? {
                let entry = entry?;
                let path = entry.path();
                if path.extension().and_then(|s| s.to_str()) == Some("csv") {
                    files.push(path);
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    Ok(files)
}

fn process_csv_file(
    path: &Path,
    settings: &TrendSettings,
    out_dir: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);
    let mut entries = Vec::new();

    for result in rdr.records() {
        // Malformed rows are skipped, not fatal
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping row in {:?}: {}", path, err);
                continue;
            }
        };

        let csv_record = match parse_csv_record(&record) {
            Ok(csv_record) => csv_record,
            Err(err) => {
                warn!("skipping row in {:?}: {}", path, err);
                continue;
            }
        };

        match Entry::new(csv_record.timestamp, csv_record.value, csv_record.note) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("skipping row in {:?}: {}", path, err),
        }
    }

    // Sort by timestamp
    entries.sort_by_key(|e| e.recorded_at);

    let mut analyzer = Analyzer::new(settings.clone())?;
    analyzer.add_entries(entries);

    print_report(path, &analyzer);

    if let Some(out_dir) = out_dir {
        write_chart_data(path, &analyzer, out_dir)?;
    }

    Ok(())
}

fn parse_csv_record(record: &csv::StringRecord) -> Result<CsvRecord, Box<dyn Error>> {
    let timestamp_field = record.get(0).ok_or("missing timestamp column")?;
    let value_field = record.get(1).ok_or("missing value column")?;

    let timestamp = NaiveDateTime::parse_from_str(timestamp_field, "%Y-%m-%d %H:%M:%S")?;
    let value = value_field.parse()?;
    let note = record
        .get(2)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Ok(CsvRecord {
        timestamp,
        value,
        note,
    })
}

fn print_report(path: &Path, analyzer: &Analyzer) {
    let report = analyzer.report();

    println!("Analysis completed for {:?}", path);
    println!("Entries: {}", report.entry_count);
    println!("Days covered: {}", report.day_count);
    if let (Some(first), Some(last)) = (report.first_day, report.last_day) {
        println!("From {} to {}", first, last);
    }
    if let Some(latest) = report.latest_average {
        println!("Latest average: {}", format_weight(latest, WeightUnit::Kg));
    }
    if let (Some(min), Some(max)) = (report.min_average, report.max_average) {
        println!(
            "Range: {} to {}",
            format_weight(min, WeightUnit::Kg),
            format_weight(max, WeightUnit::Kg)
        );
    }
    println!("Direction: {}", report.direction);
    if !report.bands_available {
        println!("Trend lines unavailable");
    }
}

fn write_chart_data(src: &Path, analyzer: &Analyzer, out_dir: &Path) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(out_dir)?;

    let chart = ChartData {
        daily_averages: analyzer.daily_averages(),
        bands: analyzer.trend_bands(),
    };

    let stem = src.file_stem().and_then(|s| s.to_str()).unwrap_or("weights");
    let out_path = out_dir.join(format!("{}.json", stem));
    std::fs::write(&out_path, serde_json::to_string_pretty(&chart)?)?;
    println!("Saved chart data to {}", out_path.display());

    Ok(())
}
