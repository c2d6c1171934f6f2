//! Skycast CLI
//!
//! Current weather and a 5-day forecast in the terminal.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use application::SearchOutcome;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use domain::UnitSystem;
use infrastructure::{AppConfig, TelemetryConfig, build_search_service, init_telemetry};
use presentation_cli::{
    Cli, Commands, log_filter_from_verbosity,
    render::{render_failure, render_outcome},
    watch::run_live_updates,
};
use tracing::{info, warn};

fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Verbosity picks the level, the config file picks the format
    init_telemetry(&TelemetryConfig {
        log_filter: log_filter_from_verbosity(cli.verbose).to_string(),
        format: config.telemetry.format,
    })?;

    match cli.command {
        Commands::Search { place, json, watch } => search(&config, place, json, watch).await,

        Commands::Last => {
            let service = build_search_service(&config)?;
            println!("{}", service.initial_place().await);
            Ok(ExitCode::SUCCESS)
        },

        Commands::Config => {
            println!("# weather.api_key = \"{}\"", config.weather.masked_api_key());
            print!("{}", config.to_toml_string()?);
            Ok(ExitCode::SUCCESS)
        },
    }
}

async fn search(
    config: &AppConfig,
    place: Option<String>,
    json: bool,
    watch: bool,
) -> anyhow::Result<ExitCode> {
    let service = build_search_service(config)?;
    let tz = config.weather.timezone()?.tz();
    let units = config.weather.units;

    let place = match place {
        Some(place) => place,
        None => service.initial_place().await,
    };

    info!(%place, source = service.source_name(), "Searching");
    let mut outcome = match service.search(&place).await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(error = %err, "Search failed");
            eprint!("{}", render_failure(&err, &place));
            return Ok(ExitCode::FAILURE);
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(ExitCode::SUCCESS);
    }

    print!("{}", render_outcome(&outcome, units, today(tz)));

    if watch {
        if config.weather.is_demo() {
            watch_live(&mut outcome, units, tz).await;
        } else {
            warn!("Live updates are only available with demo data");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Re-render with drifted temperatures until interrupted
async fn watch_live(outcome: &mut SearchOutcome, units: UnitSystem, tz: Tz) {
    run_live_updates(outcome, &mut rand::rng(), tokio::signal::ctrl_c(), |view| {
        print!("\n{}", render_outcome(view, units, today(tz)));
    })
    .await;
}
