//! Live temperature updates for demo mode
//!
//! While watching synthetic data, every temperature on screen wanders by up
//! to one degree per tick and stays inside plausible bounds.

use std::time::Duration;

use application::SearchOutcome;
use integration_weather::synthetic::{HIGH_TEMPERATURE_BOUNDS, LOW_TEMPERATURE_BOUNDS, drift};
use rand::Rng;
use tracing::info;

/// Time between live updates
pub const LIVE_UPDATE_INTERVAL: Duration = Duration::from_secs(30);

/// Nudge the current temperature and every daily extreme in place
///
/// Values are rounded before drifting since the view only ever shows whole
/// degrees.
pub fn apply_live_drift<R: Rng + ?Sized>(outcome: &mut SearchOutcome, rng: &mut R) {
    let sample = &mut outcome.report.current.sample;
    sample.temperature = drift(sample.temperature.round(), &HIGH_TEMPERATURE_BOUNDS, rng);

    for day in &mut outcome.daily {
        day.temp_max = drift(day.temp_max.round(), &HIGH_TEMPERATURE_BOUNDS, rng);
        day.temp_min = drift(day.temp_min.round(), &LOW_TEMPERATURE_BOUNDS, rng);
    }
}

/// Drift `outcome` on every [`LIVE_UPDATE_INTERVAL`] tick until `shutdown`
/// completes, passing each updated view to `on_update`
///
/// Returns the number of updates applied.
pub async fn run_live_updates<R, F>(
    outcome: &mut SearchOutcome,
    rng: &mut R,
    shutdown: impl Future,
    mut on_update: F,
) -> usize
where
    R: Rng + ?Sized,
    F: FnMut(&SearchOutcome),
{
    let mut ticker = tokio::time::interval(LIVE_UPDATE_INTERVAL);
    // First tick completes immediately
    ticker.tick().await;
    tokio::pin!(shutdown);

    let mut updates = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                apply_live_drift(outcome, rng);
                updates += 1;
                on_update(outcome);
            }
            _ = &mut shutdown => {
                info!(updates, "Stopping live updates");
                break;
            }
        }
    }
    updates
}
