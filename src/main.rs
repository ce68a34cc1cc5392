use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use flight_filter::app::{report, sample};
use flight_filter::utils::{logger, validation::Validate};
use flight_filter::{CliConfig, FilterService, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting flight-filter");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let now = Utc::now();
    let flights = sample::sample_flights_from(now + chrono::Duration::days(config.days_ahead))
        .context("building sample flights")?;

    let service = config
        .build_filters()
        .into_iter()
        .fold(FilterService::new(), FilterService::with_filter);
    tracing::info!(
        flights = flights.len(),
        filters = ?service.filter_names(),
        "Applying filters"
    );

    let sections = report::build_report(&flights, service.filters());
    let output = match config.format {
        OutputFormat::Text => report::render_text(&sections),
        OutputFormat::Json => report::render_json(&sections).context("rendering report")?,
    };
    print!("{}", output);

    let passed = sections.last().map_or(0, |s| s.flights.len());
    tracing::info!(passed, total = flights.len(), "Done");
    Ok(())
}
