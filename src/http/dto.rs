//! Data Transfer Objects for the HTTP API.
//!
//! Wire field names (`weather_data`, `aqi_data`, `temperature`, ...) are
//! the contract the dashboard frontend consumes; the internal model names
//! stay independent of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{EnvironmentReading, PollutantKey};

/// Query parameters for the environment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvironmentQuery {
    /// City to look up
    #[serde(default)]
    pub city: Option<String>,
}

/// Weather block of the environment response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDto {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity, 0-100
    pub humidity: f64,
    /// Condition description
    pub weather: String,
}

/// Air-quality block of the environment response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiDto {
    /// Overall US-EPA AQI
    pub aqi_us: u32,
    /// Key of the pollutant driving the AQI
    pub dominant_pollutant: String,
    /// Raw per-pollutant readings
    pub pollutants: BTreeMap<PollutantKey, f64>,
}

/// Response body for `GET /environment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentResponse {
    /// The queried city
    pub city: String,
    pub weather_data: WeatherDto,
    pub aqi_data: AqiDto,
}

impl From<EnvironmentReading> for EnvironmentResponse {
    fn from(reading: EnvironmentReading) -> Self {
        Self {
            city: reading.city,
            weather_data: WeatherDto {
                temperature: reading.weather.temperature_c,
                humidity: reading.weather.humidity_pct,
                weather: reading.weather.condition,
            },
            aqi_data: AqiDto {
                aqi_us: reading.air_quality.aqi_us,
                dominant_pollutant: reading.air_quality.dominant_pollutant,
                pollutants: reading.air_quality.pollutants,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AirQualityReport, WeatherReport};

    #[test]
    fn test_environment_response_wire_shape() {
        let mut pollutants = BTreeMap::new();
        pollutants.insert(PollutantKey::Pm25, 81.0);
        let reading = EnvironmentReading {
            city: "Delhi".to_string(),
            weather: WeatherReport {
                temperature_c: 31.2,
                humidity_pct: 48.0,
                condition: "haze".to_string(),
            },
            air_quality: AirQualityReport {
                aqi_us: 172,
                dominant_pollutant: "pm25".to_string(),
                pollutants,
            },
        };

        let response: EnvironmentResponse = reading.into();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["city"], "Delhi");
        assert_eq!(value["weather_data"]["temperature"], 31.2);
        assert_eq!(value["weather_data"]["weather"], "haze");
        assert_eq!(value["aqi_data"]["aqi_us"], 172);
        assert_eq!(value["aqi_data"]["pollutants"]["pm25"], 81.0);
    }
}
