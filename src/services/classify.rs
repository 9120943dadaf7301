//! Threshold-based severity classification for pollutant readings.
//!
//! A [`ThresholdBand`] is an ordered 4-tuple of ascending breakpoints that
//! splits the value axis into 5 intervals, each mapped to one severity
//! tier. Bands are static configuration per pollutant, not derived from
//! data, and every interval is closed on its upper bound: a value exactly
//! on a breakpoint belongs to the lower tier.
//!
//! This is a display derivation, not a validating pipeline: keys without a
//! band (dew point, pressure, wind and the like) and absent or non-finite
//! values classify to a neutral placeholder, never an error.

use serde::Serialize;

use crate::models::PollutantKey;

/// Ascending breakpoints separating the five severity tiers.
pub type ThresholdBand = [f64; 4];

/// Placeholder label for values that carry no severity grade.
pub const NO_DATA_LABEL: &str = "No data";

// US-EPA style breakpoints per health-graded pollutant, in the provider's
// native units.
const CO_BAND: ThresholdBand = [4.4, 9.4, 12.4, 15.4];
const PM25_BAND: ThresholdBand = [12.0, 35.4, 55.4, 150.4];
const PM10_BAND: ThresholdBand = [54.0, 154.0, 254.0, 354.0];
const NO2_BAND: ThresholdBand = [53.0, 100.0, 360.0, 649.0];
const O3_BAND: ThresholdBand = [54.0, 70.0, 85.0, 105.0];
const SO2_BAND: ThresholdBand = [35.0, 75.0, 185.0, 304.0];

/// Severity tiers, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AirLevel {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    Hazardous,
}

impl AirLevel {
    /// Dashboard label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            AirLevel::Good => "Good",
            AirLevel::Moderate => "Moderate",
            AirLevel::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AirLevel::Unhealthy => "Unhealthy",
            AirLevel::Hazardous => "Hazardous",
        }
    }

    /// Numeric tier, 0 (Good) through 4 (Hazardous).
    pub fn tier(&self) -> u8 {
        match self {
            AirLevel::Good => 0,
            AirLevel::Moderate => 1,
            AirLevel::UnhealthySensitive => 2,
            AirLevel::Unhealthy => 3,
            AirLevel::Hazardous => 4,
        }
    }
}

/// Result of classifying one displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    /// Tier label, or the neutral placeholder when ungraded
    pub label: &'static str,
    /// Severity tier 0-4; `None` for informational or missing values
    pub tier: Option<u8>,
}

impl Classification {
    fn no_data() -> Self {
        Classification {
            label: NO_DATA_LABEL,
            tier: None,
        }
    }
}

/// Static threshold band for a pollutant key, if the key is health-graded.
pub fn band_for(key: PollutantKey) -> Option<&'static ThresholdBand> {
    match key {
        PollutantKey::Co => Some(&CO_BAND),
        PollutantKey::Pm25 => Some(&PM25_BAND),
        PollutantKey::Pm10 => Some(&PM10_BAND),
        PollutantKey::No2 => Some(&NO2_BAND),
        PollutantKey::O3 => Some(&O3_BAND),
        PollutantKey::So2 => Some(&SO2_BAND),
        // Informational parameters, not health-graded
        PollutantKey::Dew
        | PollutantKey::H
        | PollutantKey::P
        | PollutantKey::T
        | PollutantKey::W
        | PollutantKey::Wd
        | PollutantKey::Wg => None,
    }
}

/// Map a value to its severity tier against an explicit band.
///
/// Intervals are closed on the upper bound: `value <= t0` is Good,
/// `t0 < value <= t1` is Moderate, and so on; `value > t3` is Hazardous.
pub fn classify(value: f64, band: &ThresholdBand) -> AirLevel {
    let [t0, t1, t2, t3] = *band;
    if value <= t0 {
        AirLevel::Good
    } else if value <= t1 {
        AirLevel::Moderate
    } else if value <= t2 {
        AirLevel::UnhealthySensitive
    } else if value <= t3 {
        AirLevel::Unhealthy
    } else {
        AirLevel::Hazardous
    }
}

/// Classify one pollutant reading for display.
///
/// Returns the neutral placeholder when the key has no band or the value
/// is absent or non-finite.
pub fn classify_pollutant(key: PollutantKey, value: Option<f64>) -> Classification {
    let band = match band_for(key) {
        Some(band) => band,
        None => return Classification::no_data(),
    };
    match value {
        Some(v) if v.is_finite() => {
            let level = classify(v, band);
            Classification {
                label: level.label(),
                tier: Some(level.tier()),
            }
        }
        _ => Classification::no_data(),
    }
}
