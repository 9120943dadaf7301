//! Application configuration and environment variable handling.

use std::env;

/// Configuration loaded once at startup from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeather API key
    pub openweather_api_key: String,
    /// WAQI API token
    pub waqi_api_token: String,
    /// Server bind host (default: 0.0.0.0)
    pub host: String,
    /// Server bind port (default: 8080)
    pub port: u16,
}

impl AppConfig {
    /// Create a new configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `OPENWEATHER_API_KEY` (required): OpenWeather API key
    /// - `WAQI_API_TOKEN` (required): WAQI API token
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    ///
    /// # Errors
    /// Returns an error if a required variable is not set or `PORT` is not
    /// a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let openweather_api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| "OPENWEATHER_API_KEY environment variable must be set".to_string())?;
        let waqi_api_token = env::var("WAQI_API_TOKEN")
            .map_err(|_| "WAQI_API_TOKEN environment variable must be set".to_string())?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a valid port number, got {raw:?}"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            openweather_api_key,
            waqi_api_token,
            host,
            port,
        })
    }
}
