//! Fork-join aggregation of the two upstream providers.
//!
//! One city query fans out into two independent provider calls issued
//! concurrently; the merged [`EnvironmentReading`] is assembled only once
//! both have completed. There is no retry, no caching and no partial
//! result: a single provider failure fails the whole query, and the error
//! names the provider (or both) that failed.

use std::sync::Arc;

use tracing::debug;

use crate::clients::{AirQualityProvider, WeatherProvider};
use crate::error::{FetchError, Provider};
use crate::models::EnvironmentReading;

/// Orchestrates the weather and air-quality providers for single-city
/// queries. Stateless apart from the provider handles; every call builds a
/// fresh reading.
pub struct Aggregator {
    weather: Arc<dyn WeatherProvider>,
    air_quality: Arc<dyn AirQualityProvider>,
}

impl Aggregator {
    pub fn new(weather: Arc<dyn WeatherProvider>, air_quality: Arc<dyn AirQualityProvider>) -> Self {
        Self {
            weather,
            air_quality,
        }
    }

    /// Fetch and merge the current environment snapshot for a city.
    ///
    /// Blank or whitespace-only input fails with [`FetchError::InvalidInput`]
    /// before any network call is issued.
    pub async fn fetch_environment(&self, city: &str) -> Result<EnvironmentReading, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::InvalidInput);
        }

        debug!(city, "fetching environment snapshot");

        // Both calls are independent; await both before deciding the outcome
        // so a double failure can be reported as such.
        let (weather, air_quality) = tokio::join!(
            self.weather.current_weather(city),
            self.air_quality.current_air_quality(city),
        );

        match (weather, air_quality) {
            (Ok(weather), Ok(air_quality)) => Ok(EnvironmentReading {
                city: city.to_string(),
                weather,
                air_quality,
            }),
            (Err(weather), Err(air_quality)) => Err(FetchError::BothUpstreams {
                weather,
                air_quality,
            }),
            (Err(source), Ok(_)) => Err(FetchError::Upstream {
                provider: Provider::Weather,
                source,
            }),
            (Ok(_), Err(source)) => Err(FetchError::Upstream {
                provider: Provider::AirQuality,
                source,
            }),
        }
    }
}
