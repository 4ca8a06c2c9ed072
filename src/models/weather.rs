//! Weather observation model and display helpers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// City name used by the placeholder record when no city was provided
pub const UNAVAILABLE_CITY: &str = "N/A";

/// A single weather observation attached to a prediction
///
/// Exactly one of three provenances:
/// - live API result (`simulated == false`, all readings populated)
/// - user-simulated value (`simulated == true`, only the temperature may be
///   populated)
/// - unavailable placeholder (`city == "N/A"`, no readings)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherRecord {
    /// City the observation belongs to
    pub city: String,
    /// Outdoor temperature in Celsius
    pub temperature: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Human-readable description of conditions
    pub description: Option<String>,
    /// Whether the temperature was supplied by the user instead of the API
    pub simulated: bool,
    /// Message from a failed live lookup, shown inline in the report
    pub error: Option<String>,
    /// When this record was built
    pub retrieved_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Build a record from a successful live API lookup
    #[must_use]
    pub fn live(city: String, temperature: f64, humidity: f64, description: String) -> Self {
        Self {
            city,
            temperature: Some(temperature),
            humidity: Some(humidity),
            description: Some(description),
            simulated: false,
            error: None,
            retrieved_at: Utc::now(),
        }
    }

    /// Build a simulated record from a user-supplied temperature string.
    ///
    /// A missing or unparseable value yields a record with an unavailable
    /// temperature rather than an error; the prediction still completes.
    #[must_use]
    pub fn simulated_from_input(city: String, raw_temperature: Option<&str>) -> Self {
        let temperature = raw_temperature.and_then(|raw| raw.trim().parse::<f64>().ok());
        Self {
            city,
            temperature,
            humidity: None,
            description: None,
            simulated: true,
            error: None,
            retrieved_at: Utc::now(),
        }
    }

    /// Build the fallback record for a failed live lookup, preserving the
    /// triggering message for inline display
    #[must_use]
    pub fn fetch_failed(city: String, message: String) -> Self {
        Self {
            city,
            temperature: None,
            humidity: None,
            description: None,
            simulated: true,
            error: Some(message),
            retrieved_at: Utc::now(),
        }
    }

    /// Placeholder used when no city was provided
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            city: UNAVAILABLE_CITY.to_string(),
            temperature: None,
            humidity: None,
            description: None,
            simulated: true,
            error: None,
            retrieved_at: Utc::now(),
        }
    }

    /// Temperature for display, `N/A` when unavailable
    #[must_use]
    pub fn display_temperature(&self) -> String {
        Self::display_reading(self.temperature)
    }

    /// Humidity for display, `N/A` when unavailable
    #[must_use]
    pub fn display_humidity(&self) -> String {
        Self::display_reading(self.humidity)
    }

    /// Conditions description for display, `N/A` when unavailable
    #[must_use]
    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| "N/A".to_string())
    }

    // Debug float formatting keeps the trailing .0 on whole readings
    fn display_reading(value: Option<f64>) -> String {
        value.map_or_else(|| "N/A".to_string(), |v| format!("{v:?}"))
    }
}
