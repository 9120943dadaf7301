//! Serializable dashboard view-state.
//!
//! The presentation layer owns exactly one explicit state object instead of
//! ambient globals: selected city, favorites, the expanded pollutant card,
//! the auto-refresh flag and the last fetched reading. Sub-views receive it
//! by reference. Everything here is session-transient; nothing is persisted.
//!
//! Severity labels and health advice are derived on demand from the raw
//! reading and never stored, so a stale reading re-renders consistently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EnvironmentReading, PollutantKey};
use crate::services::advice::advice_for;
use crate::services::classify::{classify_pollutant, Classification};

/// One rendered pollutant card row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantRow {
    pub key: PollutantKey,
    /// Human-readable name for the card header
    pub name: &'static str,
    /// Raw provider-native value
    pub value: f64,
    /// Derived severity label and tier
    pub classification: Classification,
}

/// The dashboard's complete UI state for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    /// City currently shown, if any
    pub selected_city: Option<String>,
    /// Favorited city names, insertion-ordered, no duplicates
    pub favorites: Vec<String>,
    /// Pollutant card currently expanded, if any
    pub expanded_pollutant: Option<PollutantKey>,
    /// Whether the periodic re-fetch timer is running
    pub auto_refresh: bool,
    /// Last successfully fetched reading; kept visible (stale) on failure
    pub last_reading: Option<EnvironmentReading>,
    /// When `last_reading` was applied
    pub last_updated: Option<DateTime<Utc>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_city(&mut self, city: impl Into<String>) {
        self.selected_city = Some(city.into());
    }

    pub fn is_favorite(&self, city: &str) -> bool {
        self.favorites.iter().any(|c| c == city)
    }

    /// Add or remove a favorite. Returns true when the city is a favorite
    /// after the call.
    pub fn toggle_favorite(&mut self, city: &str) -> bool {
        if let Some(pos) = self.favorites.iter().position(|c| c == city) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(city.to_string());
            true
        }
    }

    /// Expand a pollutant card, or collapse it if it was already expanded.
    pub fn toggle_expanded(&mut self, key: PollutantKey) {
        if self.expanded_pollutant == Some(key) {
            self.expanded_pollutant = None;
        } else {
            self.expanded_pollutant = Some(key);
        }
    }

    /// Replace the displayed reading. The previous reading is discarded;
    /// readings are never merged or mutated.
    pub fn apply_reading(&mut self, reading: EnvironmentReading, at: DateTime<Utc>) {
        self.selected_city = Some(reading.city.clone());
        self.last_reading = Some(reading);
        self.last_updated = Some(at);
    }

    /// Overall AQI of the displayed reading, if one is shown.
    pub fn current_aqi(&self) -> Option<u32> {
        self.last_reading.as_ref().map(|r| r.air_quality.aqi_us)
    }

    /// Health-advice strings for the displayed reading. Empty when nothing
    /// has been fetched yet.
    pub fn advice(&self) -> &'static [&'static str] {
        advice_for(self.current_aqi())
    }

    /// Pollutant card rows for the displayed reading, classified on the fly.
    pub fn pollutant_rows(&self) -> Vec<PollutantRow> {
        let reading = match &self.last_reading {
            Some(reading) => reading,
            None => return Vec::new(),
        };
        reading
            .air_quality
            .pollutants
            .iter()
            .map(|(&key, &value)| PollutantRow {
                key,
                name: key.display_name(),
                value,
                classification: classify_pollutant(key, Some(value)),
            })
            .collect()
    }
}
