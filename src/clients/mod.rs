//! Upstream provider adapters.
//!
//! Each client is a thin adapter over one third-party API: given a city
//! name it resolves the location with that provider's own lookup semantics,
//! issues a single read, and normalizes the provider-specific payload into
//! the crate's model types. The aggregator depends on the traits only, so
//! tests can substitute mock providers.
//!
//! Request/response shapes in the submodules are provider contracts, not
//! part of this crate's design.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{AirQualityReport, WeatherReport};

pub mod openweather;
pub mod waqi;

pub use openweather::OpenWeatherClient;
pub use waqi::WaqiClient;

/// Weather-by-city-name provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current weather snapshot for a city.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError>;
}

/// Air-quality-by-city-name provider.
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Fetch the current air-quality snapshot for a city.
    async fn current_air_quality(&self, city: &str) -> Result<AirQualityReport, ProviderError>;
}
