//! Integration tests for CLI
//!
//! These tests cover argument parsing and the search pipeline the binary
//! drives, without spawning the binary itself.

#![allow(clippy::panic, clippy::unwrap_used)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use infrastructure::{AppConfig, build_search_service};
use presentation_cli::{Cli, Commands, render};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

fn demo_config(dir: &tempfile::TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.weather.current_delay_ms = 0;
    config.weather.forecast_delay_ms = 0;
    config.storage.last_place_path = dir.path().join("last_place.json");
    config
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn cli_parses_search_with_place() {
    let cli = parse_args(&["skycast", "search", "London, UK"]).unwrap();
    if let Commands::Search { place, json, watch } = cli.command {
        assert_eq!(place.as_deref(), Some("London, UK"));
        assert!(!json);
        assert!(!watch);
    } else {
        panic!("Expected Search command");
    }
}

#[test]
fn cli_parses_search_without_place() {
    let cli = parse_args(&["skycast", "search"]).unwrap();
    assert!(matches!(cli.command, Commands::Search { place: None, .. }));
}

#[test]
fn cli_parses_json_flag() {
    let cli = parse_args(&["skycast", "search", "Paris", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::Search { json: true, .. }));
}

#[test]
fn cli_parses_watch_flag() {
    let cli = parse_args(&["skycast", "search", "-w"]).unwrap();
    assert!(matches!(cli.command, Commands::Search { watch: true, .. }));
}

#[test]
fn cli_rejects_json_with_watch() {
    assert!(parse_args(&["skycast", "search", "--json", "--watch"]).is_err());
}

#[test]
fn cli_parses_last_and_config() {
    assert!(matches!(
        parse_args(&["skycast", "last"]).unwrap().command,
        Commands::Last
    ));
    assert!(matches!(
        parse_args(&["skycast", "config"]).unwrap().command,
        Commands::Config
    ));
}

#[test]
fn cli_global_options_after_subcommand() {
    let cli = parse_args(&["skycast", "search", "Oslo", "-vv", "--config", "alt.toml"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["skycast"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["skycast", "forecast"]).is_err());
}

// ============================================================================
// Search pipeline
// ============================================================================

#[tokio::test]
async fn demo_search_renders_full_view() {
    let dir = tempfile::tempdir().unwrap();
    let config = demo_config(&dir);
    let service = build_search_service(&config).unwrap();

    let outcome = service.search("Reykjavik").await.unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let text = render::render_outcome(&outcome, config.weather.units, today);

    assert!(text.starts_with("Reykjavik\nMonday, January 15, 2024\n"));
    assert!(text.contains("⛅  partly cloudy"));
    assert!(text.contains("5-Day Forecast"));
    assert_eq!(text.lines().filter(|line| line.contains(" H: ")).count(), 5);
}

#[tokio::test]
async fn last_place_follows_searches() {
    let dir = tempfile::tempdir().unwrap();
    let config = demo_config(&dir);

    let service = build_search_service(&config).unwrap();
    assert_eq!(service.initial_place().await, "London");

    service.search("Lima").await.unwrap();

    let restarted = build_search_service(&config).unwrap();
    assert_eq!(restarted.initial_place().await, "Lima");
}

#[tokio::test]
async fn empty_search_renders_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let service = build_search_service(&demo_config(&dir)).unwrap();

    let err = service.search("  ").await.unwrap_err();
    assert_eq!(render::render_failure(&err, "  "), "Please enter a city name\n");
}

#[tokio::test]
async fn json_output_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let service = build_search_service(&demo_config(&dir)).unwrap();

    let outcome = service.search("Lagos").await.unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["report"]["current"]["place"]["name"], "Lagos");
    assert_eq!(json["daily"].as_array().unwrap().len(), 5);
}
