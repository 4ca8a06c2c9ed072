//! Household facts supplied alongside the appliance list

use serde::{Deserialize, Serialize};

/// Optional household data; "no household data" is represented as `None` at
/// the call sites, never as a zeroed record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HouseholdRecord {
    /// Home size in square feet
    pub home_size_sqft: f64,
}

impl HouseholdRecord {
    #[must_use]
    pub fn new(home_size_sqft: f64) -> Self {
        Self { home_size_sqft }
    }
}
