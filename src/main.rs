use std::fs;

use chrono::Local;
use spendview::config::Config;
use spendview::date_utils::RangeGranularity;
use spendview::error::{AppError, AppResult};
use spendview::locale::EnglishLocale;
use spendview::models::{DefaultCatalog, Transaction};
use spendview::services::chart_data::build_report;
use spendview::VERSION;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendview=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    tracing::info!("Starting spendview {}", VERSION);

    let config = Config::from_env();

    let path = std::env::args().nth(1).ok_or_else(|| {
        AppError::Validation("Usage: spendview <transactions.json>".to_string())
    })?;

    let raw = fs::read_to_string(&path)?;
    let transactions: Vec<Transaction> = serde_json::from_str(&raw)?;
    tracing::info!(count = transactions.len(), "Loaded transactions");

    let window = config
        .window
        .unwrap_or_else(|| config.granularity.window_containing(Local::now().date_naive()));
    let window = if config.granularity == RangeGranularity::All {
        window.resolve_extent(data_extent(&transactions))
    } else {
        window
    };

    let report = build_report(
        &transactions,
        config.granularity,
        window,
        config.mode,
        config.theme,
        &EnglishLocale,
        &DefaultCatalog::new(),
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn data_extent(transactions: &[Transaction]) -> Option<(chrono::NaiveDate, chrono::NaiveDate)> {
    let min = transactions.iter().map(|t| t.created_at.date()).min()?;
    let max = transactions.iter().map(|t| t.created_at.date()).max()?;
    Some((min, max))
}
