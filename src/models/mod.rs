//! Data models for the wattcast library
//!
//! This module contains the core domain records organized by concern:
//! - Appliance: validated appliance entries and the caller-owned inventory
//! - Household: optional household facts
//! - Weather: live, simulated, or unavailable weather observations

pub mod appliance;
pub mod household;
pub mod weather;

// Re-export all public types for convenient access
pub use appliance::{ApplianceInventory, ApplianceRecord};
pub use household::HouseholdRecord;
pub use weather::WeatherRecord;
