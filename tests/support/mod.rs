//! Shared mock providers for integration tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use envmon_rust::clients::{AirQualityProvider, WeatherProvider};
use envmon_rust::error::ProviderError;
use envmon_rust::models::{AirQualityReport, PollutantKey, WeatherReport};

/// What a mock provider should do when called.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Succeed; successive calls return different values so caching would
    /// be observable.
    Succeed,
    /// Fail as if the city were unknown to the provider.
    NotFound,
    /// Fail as if the payload were malformed.
    Malformed,
}

pub struct MockWeather {
    pub calls: Arc<AtomicUsize>,
    pub behavior: Behavior,
}

impl MockWeather {
    pub fn new(behavior: Behavior) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mock = Arc::new(Self {
            calls: Arc::clone(&calls),
            behavior,
        });
        (mock, calls)
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Succeed => Ok(WeatherReport {
                temperature_c: 20.0 + n as f64,
                humidity_pct: 50.0,
                condition: "clear sky".to_string(),
            }),
            Behavior::NotFound => Err(ProviderError::NotFound {
                city: city.to_string(),
            }),
            Behavior::Malformed => Err(ProviderError::Malformed(
                "main block missing".to_string(),
            )),
        }
    }
}

pub struct MockAirQuality {
    pub calls: Arc<AtomicUsize>,
    pub behavior: Behavior,
}

impl MockAirQuality {
    pub fn new(behavior: Behavior) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mock = Arc::new(Self {
            calls: Arc::clone(&calls),
            behavior,
        });
        (mock, calls)
    }
}

#[async_trait]
impl AirQualityProvider for MockAirQuality {
    async fn current_air_quality(&self, city: &str) -> Result<AirQualityReport, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Succeed => {
                let mut pollutants = BTreeMap::new();
                pollutants.insert(PollutantKey::Pm25, 150.0 + n as f64);
                pollutants.insert(PollutantKey::Pm10, 120.0);
                pollutants.insert(PollutantKey::O3, 8.9);
                pollutants.insert(PollutantKey::H, 48.0);
                Ok(AirQualityReport {
                    aqi_us: 172 + n as u32,
                    dominant_pollutant: "pm25".to_string(),
                    pollutants,
                })
            }
            Behavior::NotFound => Err(ProviderError::NotFound {
                city: city.to_string(),
            }),
            Behavior::Malformed => Err(ProviderError::Malformed(
                "aqi is not a non-negative integer: \"-\"".to_string(),
            )),
        }
    }
}
