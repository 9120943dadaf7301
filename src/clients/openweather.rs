//! OpenWeather client.
//!
//! Resolution is two-step, per the provider's API: the geocoding endpoint
//! turns a city name into coordinates, then the current-weather endpoint is
//! queried by latitude/longitude with metric units.
//!
//! API documentation: https://openweathermap.org/api

use async_trait::async_trait;
use serde::Deserialize;

use super::WeatherProvider;
use crate::error::ProviderError;
use crate::models::WeatherReport;

const GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

// ============================================================================
// OpenWeather API Response Structures
// ============================================================================

/// One match from the geocoding endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
struct GeoEntry {
    lat: f64,
    lon: f64,
}

/// Current-weather response, reduced to the fields we normalize.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    description: String,
}

// ============================================================================
// Client
// ============================================================================

/// Thin adapter over the OpenWeather geocoding + current-weather endpoints.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
        }
    }

    /// Resolve a city name to coordinates. An empty match list means the
    /// provider does not know the city.
    async fn geocode(&self, city: &str) -> Result<GeoEntry, ProviderError> {
        let payload: serde_json::Value = self
            .http
            .get(GEOCODING_URL)
            .query(&[("q", city), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entries: Vec<GeoEntry> = serde_json::from_value(payload)
            .map_err(|e| ProviderError::Malformed(format!("geocoding response: {e}")))?;

        entries
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NotFound {
                city: city.to_string(),
            })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let geo = self.geocode(city).await?;

        let payload: serde_json::Value = self
            .http
            .get(WEATHER_URL)
            .query(&[
                ("lat", geo.lat.to_string()),
                ("lon", geo.lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let response: WeatherResponse = serde_json::from_value(payload)
            .map_err(|e| ProviderError::Malformed(format!("weather response: {e}")))?;

        normalize(response)
    }
}

/// Normalize the provider payload into a [`WeatherReport`].
fn normalize(response: WeatherResponse) -> Result<WeatherReport, ProviderError> {
    let main = response
        .main
        .ok_or_else(|| ProviderError::Malformed("weather response: main block missing".to_string()))?;
    let condition = response
        .weather
        .into_iter()
        .next()
        .map(|entry| entry.description)
        .ok_or_else(|| {
            ProviderError::Malformed("weather response: conditions array empty".to_string())
        })?;

    Ok(WeatherReport {
        temperature_c: main.temp,
        humidity_pct: main.humidity,
        condition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> WeatherResponse {
        serde_json::from_value(serde_json::json!({
            "main": { "temp": 28.4, "humidity": 62, "pressure": 1008 },
            "weather": [ { "id": 721, "main": "Haze", "description": "haze" } ],
            "wind": { "speed": 2.1 }
        }))
        .unwrap()
    }

    #[test]
    fn test_normalize_happy_path() {
        let report = normalize(sample_response()).unwrap();
        assert_eq!(report.temperature_c, 28.4);
        assert_eq!(report.humidity_pct, 62.0);
        assert_eq!(report.condition, "haze");
    }

    #[test]
    fn test_normalize_missing_main_block() {
        let response: WeatherResponse =
            serde_json::from_value(serde_json::json!({ "weather": [ { "description": "haze" } ] }))
                .unwrap();
        let err = normalize(response).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn test_normalize_empty_conditions() {
        let response: WeatherResponse = serde_json::from_value(serde_json::json!({
            "main": { "temp": 10.0, "humidity": 50 },
            "weather": []
        }))
        .unwrap();
        let err = normalize(response).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }
}
