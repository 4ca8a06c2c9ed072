//! `wattcast` - Household appliance energy consumption estimation
//!
//! This library provides the core prediction pipeline: validation of raw
//! form input into typed records, per-appliance energy arithmetic, weather
//! retrieval (live or simulated fallback), and report assembly. The
//! interactive presentation layer lives outside this crate; it owns the
//! appliance collection and renders the finished report.

pub mod config;
pub mod energy;
pub mod error;
pub mod models;
pub mod prediction;
pub mod telemetry;
pub mod validation;
pub mod weather;

// Re-export core types for public API
pub use config::WattcastConfig;
pub use error::WattcastError;
pub use models::{ApplianceInventory, ApplianceRecord, HouseholdRecord, WeatherRecord};
pub use prediction::{PredictionResult, build_report, resolve_weather};
pub use weather::WeatherApiClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WattcastError>;
