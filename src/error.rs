//! Error taxonomy for the aggregation core.
//!
//! Provider adapters fail with [`ProviderError`]; the aggregator wraps those
//! in [`FetchError`], identifying which provider (or both) failed. Client
//! errors propagate unchanged - there is no retry and no partial degradation:
//! a single provider failure fails the whole query.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The upstream providers a query depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Weather,
    AirQuality,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Weather => f.write_str("weather"),
            Provider::AirQuality => f.write_str("air quality"),
        }
    }
}

/// Failure modes of a single upstream provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not resolve the requested city.
    #[error("city {city:?} could not be resolved")]
    NotFound { city: String },

    /// Network-level or HTTP-status failure talking to the provider.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered, but the payload did not have the expected shape.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Failure modes of one aggregated environment query.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The city parameter was empty or whitespace. Raised before any
    /// network I/O happens.
    #[error("city must be a non-empty string")]
    InvalidInput,

    /// Exactly one provider failed.
    #[error("{provider} provider failed: {source}")]
    Upstream {
        provider: Provider,
        #[source]
        source: ProviderError,
    },

    /// Both providers failed for the same query.
    #[error("both providers failed: weather: {weather}; air quality: {air_quality}")]
    BothUpstreams {
        weather: ProviderError,
        air_quality: ProviderError,
    },
}

impl FetchError {
    /// True when any failed provider reported the city as unresolvable.
    pub fn is_not_found(&self) -> bool {
        match self {
            FetchError::InvalidInput => false,
            FetchError::Upstream { source, .. } => {
                matches!(source, ProviderError::NotFound { .. })
            }
            FetchError::BothUpstreams {
                weather,
                air_quality,
            } => {
                matches!(weather, ProviderError::NotFound { .. })
                    || matches!(air_quality, ProviderError::NotFound { .. })
            }
        }
    }
}
