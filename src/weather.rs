//! Weather client for the OpenWeatherMap current-weather endpoint
//!
//! One blocking, time-boxed GET per lookup; no retries. The calling context
//! substitutes a placeholder record on failure instead of aborting the
//! prediction, so every error here is descriptive rather than fatal.

use crate::WattcastError;
use crate::config::WeatherServiceConfig;
use crate::models::WeatherRecord;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, error, info};

/// HTTP client for live weather lookups
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &WeatherServiceConfig) -> crate::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wattcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WattcastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch current weather for a city, in metric units.
    ///
    /// Fails with a `WeatherFetch` error on network failure, a non-success
    /// HTTP status, or a response body missing any expected field; the
    /// message always names the city and the underlying cause.
    pub fn current_weather(&self, city: &str, api_key: &str) -> crate::Result<WeatherRecord> {
        let url = format!(
            "{}?appid={}&q={}&units=metric",
            self.base_url,
            api_key,
            urlencoding::encode(city)
        );

        // Keep the key out of the logs
        debug!(
            "Requesting current weather: {}",
            url.split("appid=").next().unwrap_or(&url)
        );
        info!("Fetching live weather for '{city}'");

        let response = self.client.get(&url).send().map_err(|e| {
            error!("Weather request for '{city}' failed: {e}");
            WattcastError::weather_fetch(format!(
                "Failed to retrieve weather data for {city}: {e}. \
                 Check the city name, internet connection, or API key."
            ))
        })?;

        let status = response.status();
        if status.as_u16() == 401 {
            error!("Weather API rejected the key (HTTP 401)");
            return Err(WattcastError::weather_fetch(format!(
                "Failed to retrieve weather data for {city}: the API key was rejected \
                 (HTTP 401). The key might be invalid or inactive."
            )));
        }
        if status.as_u16() == 404 {
            return Err(WattcastError::weather_fetch(format!(
                "Failed to retrieve weather data for {city}: the city was not found \
                 (HTTP 404). Check the city name."
            )));
        }
        if !status.is_success() {
            return Err(WattcastError::weather_fetch(format!(
                "Failed to retrieve weather data for {city}: the weather service \
                 responded with HTTP {status}."
            )));
        }

        let body: openweather::CurrentWeatherResponse = response.json().map_err(|e| {
            error!("Failed to parse weather response for '{city}': {e}");
            WattcastError::weather_fetch(format!(
                "Error parsing weather data for {city}. Unexpected API response structure: {e}."
            ))
        })?;

        let record = record_from_response(city, body)?;
        info!(
            "Live weather for '{city}': {}°C, {}% humidity, {}",
            record.display_temperature(),
            record.display_humidity(),
            record.display_description()
        );
        Ok(record)
    }
}

/// Convert a parsed response body into a live weather record.
///
/// Separate from the HTTP path so schema deviations are testable offline.
fn record_from_response(
    city: &str,
    response: openweather::CurrentWeatherResponse,
) -> crate::Result<WeatherRecord> {
    let condition = response.weather.into_iter().next().ok_or_else(|| {
        WattcastError::weather_fetch(format!(
            "Error parsing weather data for {city}. Unexpected API response structure: \
             no condition entries."
        ))
    })?;

    Ok(WeatherRecord::live(
        city.to_string(),
        response.main.temp,
        response.main.humidity,
        condition.description,
    ))
}

/// OpenWeatherMap response structures
mod openweather {
    use serde::Deserialize;

    /// Current-weather response body; unknown fields are ignored
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub main: MainReadings,
        pub weather: Vec<ConditionEntry>,
    }

    /// Temperature and humidity block
    #[derive(Debug, Deserialize)]
    pub struct MainReadings {
        pub temp: f64,
        pub humidity: f64,
    }

    /// One entry of the conditions array
    #[derive(Debug, Deserialize)]
    pub struct ConditionEntry {
        pub description: String,
    }
}
