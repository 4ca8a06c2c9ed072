//! Prediction pipeline: weather resolution and report assembly
//!
//! Every function here is a pure function of its inputs apart from
//! [`resolve_weather`], whose live branch performs the single weather
//! lookup. Nothing retains state across calls; the appliance inventory is
//! owned by the caller.

use crate::models::{ApplianceRecord, HouseholdRecord, WeatherRecord};
use crate::validation;
use crate::weather::WeatherApiClient;
use serde::Serialize;
use tracing::{debug, info, warn};

const SECTION_RULE: &str = "------------------------------";

const DISCLAIMER: &str = "Note: This is a basic estimate based on appliance usage and the \
collected household and weather data. It does not learn from historical consumption or \
apply a trained forecasting model.";

/// Outcome of one prediction run; derived, never stored
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    /// Human-readable multi-line report
    pub report_text: String,
    /// Unrounded daily total in kWh
    pub total_kwh: f64,
}

/// Resolve the weather input for a prediction, never failing it.
///
/// - blank city: the unavailable placeholder
/// - credential not configured: ask the caller's prompt for a simulated
///   temperature and build a simulated record from whatever comes back
/// - otherwise: one live lookup, degrading to a placeholder that carries the
///   error message when the lookup fails
pub fn resolve_weather<F>(
    city_input: &str,
    api_key: &str,
    client: &WeatherApiClient,
    prompt_simulated_temp: F,
) -> WeatherRecord
where
    F: FnOnce(&str) -> Option<String>,
{
    let city = match validation::validate_city(city_input) {
        Ok(city) => city,
        Err(_) => {
            warn!("No city provided; weather marked unavailable");
            return WeatherRecord::unavailable();
        }
    };

    if !validation::api_key_is_configured(api_key) {
        debug!("Weather API key not configured; asking for a simulated temperature");
        let raw = prompt_simulated_temp(&city);
        return WeatherRecord::simulated_from_input(city, raw.as_deref());
    }

    match client.current_weather(&city, api_key) {
        Ok(record) => record,
        Err(e) => {
            warn!("Live weather lookup failed, continuing without it: {e}");
            WeatherRecord::fetch_failed(city, e.user_message())
        }
    }
}

/// Assemble the prediction report and daily total.
///
/// Appliances are reported in the order given; kWh values are formatted to
/// two decimals for display while the returned total stays unrounded.
#[must_use]
pub fn build_report(
    appliances: &[ApplianceRecord],
    household: Option<&HouseholdRecord>,
    weather: Option<&WeatherRecord>,
) -> PredictionResult {
    let mut total_kwh = 0.0;
    let mut lines: Vec<String> = Vec::new();

    if appliances.is_empty() {
        lines.push("No appliances entered.".to_string());
    } else {
        lines.push("--- Daily Energy Breakdown ---".to_string());
        for appliance in appliances {
            let kwh = appliance.daily_kwh();
            // Debug float formatting keeps the trailing .0 on whole values
            lines.push(format!(
                "{}x {}: {:?}W/unit x {:?}h/unit = {kwh:.2} kWh/day",
                appliance.quantity, appliance.name, appliance.wattage, appliance.hours_of_use
            ));
            total_kwh += kwh;
        }
    }

    lines.push(String::new());
    lines.push("--- Additional Factors Considered ---".to_string());

    if let Some(household) = household {
        lines.push(format!("Home Size: {:?} sqft", household.home_size_sqft));
    }

    if let Some(weather) = weather {
        lines.push(format!("City: {}", weather.city));
        if weather.simulated {
            lines.push(format!(
                "Simulated Outdoor Temperature: {}°C",
                weather.display_temperature()
            ));
            if let Some(error) = &weather.error {
                lines.push(format!("(Error during API call: {error})"));
            }
        } else {
            lines.push(format!(
                "Actual Outdoor Temperature: {}°C",
                weather.display_temperature()
            ));
            lines.push(format!("Humidity: {}%", weather.display_humidity()));
            lines.push(format!("Conditions: {}", weather.display_description()));
        }
    }

    lines.push(String::new());
    lines.push(SECTION_RULE.to_string());
    if appliances.is_empty() {
        lines.push("No appliance types were entered, so total energy consumption is 0 kWh.".to_string());
    } else {
        lines.push(format!(
            "Predicted Total Daily Energy Consumption: {total_kwh:.2} kWh"
        ));
        lines.push(format!(
            "This is approximately {:.2} kWh per month.",
            total_kwh * 30.0
        ));
    }
    lines.push(SECTION_RULE.to_string());
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    info!(
        "Prediction assembled: {} appliances, {:.2} kWh/day",
        appliances.len(),
        total_kwh
    );

    PredictionResult {
        report_text: lines.join("\n"),
        total_kwh,
    }
}
