//! Health-advice lookup keyed on the overall US-EPA AQI.
//!
//! A static table, not an algorithm: four fixed advisory lists chosen by
//! AQI breakpoints that are closed on the upper bound, matching the
//! classifier's convention. An absent AQI yields no advice at all.

/// Advice for AQI <= 50.
const EXCELLENT: [&str; 3] = [
    "Air quality is excellent - enjoy outdoor activities.",
    "Windows can stay open for fresh air.",
    "A great day for a run or a bike ride.",
];

/// Advice for AQI 51-100.
const MODERATE: [&str; 3] = [
    "Air quality is acceptable for most people.",
    "Unusually sensitive individuals should limit prolonged outdoor exertion.",
    "Keep an eye on symptoms if you have asthma or allergies.",
];

/// Advice for AQI 101-150.
const SENSITIVE: [&str; 3] = [
    "Members of sensitive groups may experience health effects.",
    "Children, older adults and people with lung disease should reduce prolonged outdoor exertion.",
    "Consider moving long workouts indoors.",
];

/// Advice for AQI > 150.
const UNHEALTHY: [&str; 4] = [
    "Everyone may begin to experience health effects.",
    "Avoid prolonged outdoor activity.",
    "Keep windows closed and run an air purifier if available.",
    "Wear a well-fitting mask if you must go outside.",
];

/// Advisory strings for the given AQI, in display order.
///
/// Returns an empty slice when the AQI is absent.
pub fn advice_for(aqi: Option<u32>) -> &'static [&'static str] {
    match aqi {
        None => &[],
        Some(value) if value <= 50 => &EXCELLENT,
        Some(value) if value <= 100 => &MODERATE,
        Some(value) if value <= 150 => &SENSITIVE,
        Some(_) => &UNHEALTHY,
    }
}
