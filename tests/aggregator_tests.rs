//! Aggregator behavior against mocked providers: input validation,
//! fork-join merging, failure propagation and the no-caching guarantee.

mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use envmon_rust::error::{FetchError, Provider};
use envmon_rust::models::PollutantKey;
use envmon_rust::services::Aggregator;

use support::{Behavior, MockAirQuality, MockWeather};

fn aggregator(
    weather: Behavior,
    air: Behavior,
) -> (
    Aggregator,
    Arc<std::sync::atomic::AtomicUsize>,
    Arc<std::sync::atomic::AtomicUsize>,
) {
    let (weather_mock, weather_calls) = MockWeather::new(weather);
    let (air_mock, air_calls) = MockAirQuality::new(air);
    (
        Aggregator::new(weather_mock, air_mock),
        weather_calls,
        air_calls,
    )
}

#[tokio::test]
async fn test_blank_city_fails_without_network_calls() {
    let (agg, weather_calls, air_calls) = aggregator(Behavior::Succeed, Behavior::Succeed);

    for city in ["", "   ", "\t\n"] {
        let err = agg.fetch_environment(city).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidInput), "city {city:?}");
    }

    assert_eq!(weather_calls.load(Ordering::SeqCst), 0);
    assert_eq!(air_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_successful_merge() {
    let (agg, _, _) = aggregator(Behavior::Succeed, Behavior::Succeed);

    let reading = agg.fetch_environment("Delhi").await.unwrap();
    assert_eq!(reading.city, "Delhi");
    assert_eq!(reading.weather.temperature_c, 20.0);
    assert_eq!(reading.weather.condition, "clear sky");
    assert_eq!(reading.air_quality.aqi_us, 172);
    assert_eq!(reading.air_quality.dominant_pollutant, "pm25");
    // Pollutant keys are restricted to the fixed vocabulary by type; spot
    // check the values came through raw.
    assert_eq!(reading.air_quality.pollutants[&PollutantKey::Pm25], 150.0);
    assert_eq!(reading.air_quality.pollutants[&PollutantKey::H], 48.0);
}

#[tokio::test]
async fn test_city_is_trimmed_before_dispatch() {
    let (agg, _, _) = aggregator(Behavior::Succeed, Behavior::Succeed);
    let reading = agg.fetch_environment("  Delhi  ").await.unwrap();
    assert_eq!(reading.city, "Delhi");
}

#[tokio::test]
async fn test_weather_failure_fails_whole_query() {
    let (agg, _, air_calls) = aggregator(Behavior::NotFound, Behavior::Succeed);

    let err = agg.fetch_environment("Atlantis").await.unwrap_err();
    match err {
        FetchError::Upstream { provider, .. } => assert_eq!(provider, Provider::Weather),
        other => panic!("expected Upstream, got {other:?}"),
    }
    // The air-quality call succeeded, yet no partial aggregate came back.
    assert_eq!(air_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_air_quality_failure_fails_whole_query() {
    let (agg, weather_calls, _) = aggregator(Behavior::Succeed, Behavior::Malformed);

    let err = agg.fetch_environment("Delhi").await.unwrap_err();
    match err {
        FetchError::Upstream { provider, .. } => assert_eq!(provider, Provider::AirQuality),
        other => panic!("expected Upstream, got {other:?}"),
    }
    assert_eq!(weather_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_double_failure_reports_both_providers() {
    let (agg, _, _) = aggregator(Behavior::NotFound, Behavior::Malformed);

    let err = agg.fetch_environment("Atlantis").await.unwrap_err();
    assert!(matches!(err, FetchError::BothUpstreams { .. }));
    let msg = err.to_string();
    assert!(msg.contains("weather"));
    assert!(msg.contains("air quality"));
}

#[tokio::test]
async fn test_repeated_fetches_are_not_cached() {
    let (agg, weather_calls, air_calls) = aggregator(Behavior::Succeed, Behavior::Succeed);

    let first = agg.fetch_environment("Delhi").await.unwrap();
    let second = agg.fetch_environment("Delhi").await.unwrap();

    // The mocks answer differently on every call; a cached or memoized
    // aggregator would return identical readings.
    assert_ne!(first, second);
    assert_eq!(first.weather.temperature_c, 20.0);
    assert_eq!(second.weather.temperature_c, 21.0);
    assert_eq!(first.air_quality.aqi_us, 172);
    assert_eq!(second.air_quality.aqi_us, 173);
    assert_eq!(weather_calls.load(Ordering::SeqCst), 2);
    assert_eq!(air_calls.load(Ordering::SeqCst), 2);
}
