//! WAQI (World Air Quality Index) client.
//!
//! The feed endpoint resolves a city name directly, so no separate
//! geocoding step is needed. The envelope carries its own status field:
//! `"ok"` with a data object, or an error status when the city is unknown.
//!
//! API documentation: https://aqicn.org/json-api/doc/

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use super::AirQualityProvider;
use crate::error::ProviderError;
use crate::models::{AirQualityReport, PollutantKey};

const FEED_BASE_URL: &str = "https://api.waqi.info/feed";

// ============================================================================
// WAQI API Response Structures
// ============================================================================

/// Top-level envelope. `data` is a string error message when `status`
/// is not "ok", so it stays untyped until the status is checked.
#[derive(Debug, Deserialize)]
struct FeedEnvelope {
    status: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// The data object of a successful feed response.
#[derive(Debug, Deserialize)]
struct FeedData {
    /// Overall AQI; the provider reports "-" instead of a number when the
    /// station has no index, hence the untyped field.
    #[serde(default)]
    aqi: serde_json::Value,
    #[serde(default)]
    dominentpol: Option<String>,
    #[serde(default)]
    iaqi: HashMap<String, IaqiEntry>,
}

/// One per-pollutant sub-reading.
#[derive(Debug, Deserialize)]
struct IaqiEntry {
    v: f64,
}

// ============================================================================
// Client
// ============================================================================

/// Thin adapter over the WAQI city feed endpoint.
pub struct WaqiClient {
    http: reqwest::Client,
    token: String,
}

impl WaqiClient {
    pub fn new(http: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            http,
            token: token.into(),
        }
    }
}

#[async_trait]
impl AirQualityProvider for WaqiClient {
    async fn current_air_quality(&self, city: &str) -> Result<AirQualityReport, ProviderError> {
        // Url::parse percent-encodes path characters like spaces for us.
        let url = Url::parse(&format!("{}/{}/", FEED_BASE_URL, city))
            .map_err(|e| ProviderError::Malformed(format!("feed url for {city:?}: {e}")))?;

        let payload: serde_json::Value = self
            .http
            .get(url)
            .query(&[("token", self.token.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let envelope: FeedEnvelope = serde_json::from_value(payload)
            .map_err(|e| ProviderError::Malformed(format!("feed envelope: {e}")))?;

        normalize(envelope, city)
    }
}

/// Normalize a feed envelope into an [`AirQualityReport`].
fn normalize(envelope: FeedEnvelope, city: &str) -> Result<AirQualityReport, ProviderError> {
    if envelope.status != "ok" {
        return Err(ProviderError::NotFound {
            city: city.to_string(),
        });
    }

    let data: FeedData = serde_json::from_value(envelope.data)
        .map_err(|e| ProviderError::Malformed(format!("feed data: {e}")))?;

    let aqi_us = data
        .aqi
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            ProviderError::Malformed(format!("aqi is not a non-negative integer: {}", data.aqi))
        })?;

    // Keys outside the fixed vocabulary are dropped, keeping the reading's
    // pollutant map a subset of the vocabulary.
    let pollutants = data
        .iaqi
        .into_iter()
        .filter_map(|(code, entry)| PollutantKey::parse(&code).map(|key| (key, entry.v)))
        .collect();

    Ok(AirQualityReport {
        aqi_us,
        dominant_pollutant: data.dominentpol.unwrap_or_default(),
        pollutants,
    })
}
