//! Core data model for merged environment readings.
//!
//! An [`EnvironmentReading`] is the aggregate produced for one city query:
//! the normalized weather snapshot from the weather provider plus the
//! normalized air-quality snapshot from the air-quality provider. Readings
//! are constructed fresh per query and never mutated or cached afterwards.
//!
//! Pollutant concentrations stay raw provider-native numbers; severity
//! classification is a presentation-time derivation (see
//! [`crate::services::classify`]) and is never stored on the reading.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed vocabulary of pollutant / parameter keys reported by the
/// air-quality provider.
///
/// The first six are health-graded pollutants; the rest are informational
/// meteorological parameters (dew point, humidity, pressure, temperature,
/// wind) that carry no severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollutantKey {
    Co,
    Pm25,
    Pm10,
    No2,
    O3,
    So2,
    Dew,
    H,
    P,
    T,
    W,
    Wd,
    Wg,
}

impl PollutantKey {
    /// All keys in the vocabulary, in canonical order.
    pub const ALL: [PollutantKey; 13] = [
        PollutantKey::Co,
        PollutantKey::Pm25,
        PollutantKey::Pm10,
        PollutantKey::No2,
        PollutantKey::O3,
        PollutantKey::So2,
        PollutantKey::Dew,
        PollutantKey::H,
        PollutantKey::P,
        PollutantKey::T,
        PollutantKey::W,
        PollutantKey::Wd,
        PollutantKey::Wg,
    ];

    /// Short code used on the wire and by the providers.
    pub fn as_str(&self) -> &'static str {
        match self {
            PollutantKey::Co => "co",
            PollutantKey::Pm25 => "pm25",
            PollutantKey::Pm10 => "pm10",
            PollutantKey::No2 => "no2",
            PollutantKey::O3 => "o3",
            PollutantKey::So2 => "so2",
            PollutantKey::Dew => "dew",
            PollutantKey::H => "h",
            PollutantKey::P => "p",
            PollutantKey::T => "t",
            PollutantKey::W => "w",
            PollutantKey::Wd => "wd",
            PollutantKey::Wg => "wg",
        }
    }

    /// Parse a provider-reported key. Keys outside the vocabulary yield
    /// `None` and are dropped at the client boundary.
    pub fn parse(code: &str) -> Option<PollutantKey> {
        PollutantKey::ALL.iter().copied().find(|k| k.as_str() == code)
    }

    /// Human-readable display name for dashboard cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            PollutantKey::Co => "Carbon Monoxide",
            PollutantKey::Pm25 => "PM2.5",
            PollutantKey::Pm10 => "PM10",
            PollutantKey::No2 => "Nitrogen Dioxide",
            PollutantKey::O3 => "Ozone",
            PollutantKey::So2 => "Sulfur Dioxide",
            PollutantKey::Dew => "Dew Point",
            PollutantKey::H => "Humidity",
            PollutantKey::P => "Pressure",
            PollutantKey::T => "Temperature",
            PollutantKey::W => "Wind Speed",
            PollutantKey::Wd => "Wind Direction",
            PollutantKey::Wg => "Wind Gust",
        }
    }
}

impl fmt::Display for PollutantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized snapshot from the weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Current temperature in degrees Celsius
    pub temperature_c: f64,
    /// Relative humidity, 0-100
    pub humidity_pct: f64,
    /// Free-text condition description (e.g. "scattered clouds")
    pub condition: String,
}

/// Normalized snapshot from the air-quality provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReport {
    /// Overall US-EPA Air Quality Index, higher is worse
    pub aqi_us: u32,
    /// Key of the pollutant whose sub-index drives the overall AQI.
    /// Kept as a free string: providers occasionally report keys outside
    /// the vocabulary here, and it is display-only.
    pub dominant_pollutant: String,
    /// Raw per-pollutant readings, keys restricted to the fixed vocabulary
    pub pollutants: BTreeMap<PollutantKey, f64>,
}

/// The aggregate returned for one city query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    /// The queried location name, trimmed
    pub city: String,
    pub weather: WeatherReport,
    pub air_quality: AirQualityReport,
}
