//! Validation of raw form input into typed records
//!
//! The presentation layer hands over untouched entry-field strings; every
//! record type in [`crate::models`] is constructed here or not at all. An
//! invalid field aborts the whole operation, so a half-valid appliance never
//! reaches the inventory.

use crate::WattcastError;
use crate::config::UNCONFIGURED_API_KEY;
use crate::models::{ApplianceRecord, HouseholdRecord};

/// Parse and range-check one appliance entry.
///
/// The name is trimmed; wattage and hours parse as floating point, quantity
/// as an unsigned integer. Wattage and quantity must be positive, hours may
/// be zero.
pub fn validate_appliance(
    name: &str,
    wattage: &str,
    hours: &str,
    quantity: &str,
) -> crate::Result<ApplianceRecord> {
    let name = name.trim();
    if name.is_empty() {
        return Err(WattcastError::validation("Appliance name must be filled in."));
    }

    let wattage: f64 = wattage
        .trim()
        .parse()
        .map_err(|_| WattcastError::validation("Wattage must be a valid number."))?;
    if wattage <= 0.0 {
        return Err(WattcastError::validation("Wattage must be a positive number."));
    }

    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| WattcastError::validation("Daily hours of use must be a valid number."))?;
    if hours < 0.0 {
        return Err(WattcastError::validation(
            "Daily hours of use cannot be negative.",
        ));
    }

    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| WattcastError::validation("Quantity must be a whole number."))?;
    if quantity == 0 {
        return Err(WattcastError::validation(
            "Quantity must be a positive number.",
        ));
    }

    Ok(ApplianceRecord {
        name: name.to_string(),
        wattage,
        hours_of_use: hours,
        quantity,
    })
}

/// Parse and range-check the home size entry
pub fn validate_household(home_size: &str) -> crate::Result<HouseholdRecord> {
    let home_size = home_size.trim();
    if home_size.is_empty() {
        return Err(WattcastError::validation("Home size must be filled in."));
    }

    let home_size_sqft: f64 = home_size
        .parse()
        .map_err(|_| WattcastError::validation("Home size must be a valid number."))?;
    if home_size_sqft <= 0.0 {
        return Err(WattcastError::validation(
            "Home size must be a positive number.",
        ));
    }

    Ok(HouseholdRecord::new(home_size_sqft))
}

/// Check the city entry is non-blank, returning it trimmed
pub fn validate_city(city: &str) -> crate::Result<String> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WattcastError::validation("City must be filled in."));
    }
    Ok(city.to_string())
}

/// Whether a usable weather API credential has been supplied.
///
/// A blank string or the shipped template value means "not configured";
/// the caller then takes the simulated/unavailable weather path instead of
/// issuing a live request.
#[must_use]
pub fn api_key_is_configured(api_key: &str) -> bool {
    !api_key.trim().is_empty() && api_key != UNCONFIGURED_API_KEY
}
