//! Terminal rendering for search results
//!
//! Everything here returns a `String` so the binary decides where it goes.

use std::fmt::Write as _;

use application::{
    ApplicationError, SearchOutcome,
    error::{NOT_FOUND_MESSAGE, NOT_FOUND_SUGGESTIONS},
};
use chrono::NaiveDate;
use domain::{CurrentConditions, DailySummary, UnitSystem};

/// Glyph shown when a condition code has no entry in the table
pub const FALLBACK_GLYPH: &str = "🌤️";

/// Map an OpenWeatherMap icon code to a display glyph
pub fn condition_glyph(code: &str) -> &'static str {
    match code {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" | "10n" => "🌧️",
        "10d" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "❄️",
        "50d" | "50n" => "🌫️",
        _ => FALLBACK_GLYPH,
    }
}

/// Round half up, the way temperatures are shown everywhere in the UI
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Header date, e.g. "Monday, January 15, 2024"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Header, condition, temperature and details for the current conditions
pub fn render_current(current: &CurrentConditions, units: UnitSystem, today: NaiveDate) -> String {
    let sample = &current.sample;
    let symbol = units.temperature_symbol();

    let mut out = String::new();
    let _ = writeln!(out, "{}", current.place.display_name());
    let _ = writeln!(out, "{}", long_date(today));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}  {}",
        condition_glyph(&sample.condition.code),
        sample.condition.description
    );
    let _ = writeln!(out, "{}{symbol}", round_half_up(sample.temperature));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Feels Like   {}{symbol}",
        round_half_up(sample.feels_like)
    );
    let _ = writeln!(out, "Humidity     {}", sample.humidity);
    let _ = writeln!(
        out,
        "Wind Speed   {} {}",
        sample.wind_speed,
        units.wind_speed_unit()
    );
    let _ = writeln!(out, "Pressure     {} hPa", sample.pressure);
    out
}

/// One forecast line: `label glyph max°/min° condition  H: max° L: min°`
pub fn render_forecast_row(day: &DailySummary) -> String {
    let max = round_half_up(day.temp_max);
    let min = round_half_up(day.temp_min);
    format!(
        "{:<12} {}  {max}°/{min}°  {}  H: {max}° L: {min}°",
        day.label,
        condition_glyph(&day.condition.code),
        day.condition.description
    )
}

/// "5-Day Forecast" section; empty when there are no summaries
pub fn render_forecast(daily: &[DailySummary]) -> String {
    if daily.is_empty() {
        return String::new();
    }

    let mut out = String::from("5-Day Forecast\n");
    for day in daily {
        out.push_str(&render_forecast_row(day));
        out.push('\n');
    }
    out
}

/// Full terminal view for a search result
pub fn render_outcome(outcome: &SearchOutcome, units: UnitSystem, today: NaiveDate) -> String {
    let mut out = render_current(&outcome.report.current, units, today);
    let forecast = render_forecast(&outcome.daily);
    if !forecast.is_empty() {
        out.push('\n');
        out.push_str(&forecast);
    }
    out
}

/// Dedicated block for a place the source does not know
pub fn render_not_found(place: &str) -> String {
    let mut out = String::from("City Not Found\n");
    let _ = writeln!(out, "\"{place}\"");
    let _ = writeln!(out, "{NOT_FOUND_MESSAGE}\n");
    out.push_str("Suggestions:\n");
    for suggestion in NOT_FOUND_SUGGESTIONS {
        let _ = writeln!(out, "  • {suggestion}");
    }
    out
}

/// Message for a failed search
pub fn render_failure(err: &ApplicationError, place: &str) -> String {
    if err.is_not_found() {
        render_not_found(place.trim())
    } else {
        format!("{}\n", err.user_message())
    }
}
