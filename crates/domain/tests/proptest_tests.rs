//! Property-based tests for forecast aggregation and domain value objects

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use domain::{
    Condition, ForecastAggregator, ForecastFeed, Humidity, PlaceQuery, WeatherSample,
};
use proptest::prelude::*;

/// Per day, a list of `(temp_min, spread)` pairs (one per 3-hour slot)
type DayPlan = Vec<Vec<(f64, f64)>>;

fn day_plan() -> impl Strategy<Value = DayPlan> {
    prop::collection::vec(
        prop::collection::vec((-40.0f64..40.0f64, 0.0f64..20.0f64), 1..=8),
        0..10,
    )
}

fn origin() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn build_samples(plan: &DayPlan) -> Vec<WeatherSample> {
    let mut samples = Vec::new();
    for (day, slots) in plan.iter().enumerate() {
        for (slot, &(temp_min, spread)) in slots.iter().enumerate() {
            let timestamp = origin()
                + Duration::days(i64::try_from(day).unwrap())
                + Duration::hours(3 * i64::try_from(slot).unwrap());
            samples.push(WeatherSample {
                timestamp,
                temperature: temp_min,
                feels_like: temp_min,
                temp_max: temp_min + spread,
                temp_min,
                humidity: Humidity::new(50).unwrap(),
                pressure: 1013,
                wind_speed: 1.0,
                condition: Condition::new(format!("{slot:02}d"), "test"),
            });
        }
    }
    samples
}

// ============================================================================
// Forecast Aggregator Property Tests
// ============================================================================

mod aggregation_tests {
    use super::*;

    proptest! {
        #[test]
        fn day_count_is_bounded(plan in day_plan()) {
            let days = plan.len();
            let summaries = ForecastAggregator::new(Tz::UTC)
                .summarize_samples(build_samples(&plan))
                .unwrap();

            prop_assert_eq!(summaries.len(), days.saturating_sub(1).min(5));
        }

        #[test]
        fn aggregation_is_idempotent(plan in day_plan()) {
            let aggregator = ForecastAggregator::new(Tz::UTC);
            let feed = ForecastFeed::new(build_samples(&plan)).unwrap();

            prop_assert_eq!(aggregator.summarize(&feed), aggregator.summarize(&feed));
        }

        #[test]
        fn reduction_matches_exact_extremes(plan in day_plan()) {
            let summaries = ForecastAggregator::new(Tz::UTC)
                .summarize_samples(build_samples(&plan))
                .unwrap();

            for (summary, slots) in summaries.iter().zip(plan.iter().skip(1)) {
                let expected_max = slots
                    .iter()
                    .map(|(min, spread)| min + spread)
                    .fold(f64::NEG_INFINITY, f64::max);
                let expected_min = slots
                    .iter()
                    .map(|(min, _)| *min)
                    .fold(f64::INFINITY, f64::min);

                prop_assert!(summary.temp_max >= summary.temp_min);
                prop_assert_eq!(summary.temp_max, expected_max);
                prop_assert_eq!(summary.temp_min, expected_min);
                prop_assert_eq!(summary.sample_count, slots.len());
                prop_assert_eq!(summary.condition.code.as_str(), "00d");
            }
        }

        #[test]
        fn summaries_are_strictly_ascending(plan in day_plan()) {
            let summaries = ForecastAggregator::new(Tz::America__New_York)
                .summarize_samples(build_samples(&plan))
                .unwrap();

            prop_assert!(summaries.windows(2).all(|w| w[0].date < w[1].date));
        }

        #[test]
        fn max_days_is_respected(plan in day_plan(), max_days in 0usize..8) {
            let summaries = ForecastAggregator::new(Tz::UTC)
                .with_max_days(max_days)
                .summarize_samples(build_samples(&plan))
                .unwrap();

            prop_assert!(summaries.len() <= max_days);
        }
    }
}

// ============================================================================
// PlaceQuery Property Tests
// ============================================================================

mod place_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(raw in "[ \t\n]{0,20}") {
            prop_assert!(PlaceQuery::new(&raw).is_err());
        }

        #[test]
        fn surrounding_whitespace_is_trimmed(
            name in "[A-Za-z][A-Za-z ,]{0,40}[A-Za-z]",
            pad in "[ \t]{0,5}"
        ) {
            let query = PlaceQuery::new(format!("{pad}{name}{pad}")).unwrap();
            prop_assert_eq!(query.as_str(), name.as_str());
        }
    }
}

// ============================================================================
// Humidity Property Tests
// ============================================================================

mod humidity_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_range_accepted(percent in 0u8..=100) {
            prop_assert_eq!(Humidity::new(percent).unwrap().percent(), percent);
        }

        #[test]
        fn out_of_range_rejected(percent in 101u8..=255) {
            prop_assert!(Humidity::new(percent).is_err());
            prop_assert_eq!(Humidity::saturating(percent).percent(), 100);
        }
    }
}
