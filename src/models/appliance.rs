//! Appliance records and the caller-owned inventory

use crate::WattcastError;
use crate::energy::energy_kwh;
use serde::{Deserialize, Serialize};

/// A single validated appliance entry
///
/// Built by [`crate::validation::validate_appliance`]; the fields are plain
/// data and are not mutated after construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApplianceRecord {
    /// Display name, trimmed
    pub name: String,
    /// Power draw per unit in watts
    pub wattage: f64,
    /// Daily hours of use per unit
    pub hours_of_use: f64,
    /// Number of identical units
    pub quantity: u32,
}

impl ApplianceRecord {
    /// Daily energy contribution of this entry in kWh
    #[must_use]
    pub fn daily_kwh(&self) -> f64 {
        energy_kwh(self.wattage, self.hours_of_use, self.quantity)
    }

    /// One-line summary for list widgets, e.g. `2x Fan (45.0W, 8.0h/day)`
    #[must_use]
    pub fn summary(&self) -> String {
        // Debug float formatting keeps the trailing .0 on whole values
        format!(
            "{}x {} ({:?}W, {:?}h/day)",
            self.quantity, self.name, self.wattage, self.hours_of_use
        )
    }
}

/// Ordered collection of appliance entries, owned by the presentation layer
///
/// Insertion order is display order; entries are removed by explicit
/// index-based user action and are never re-sorted.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ApplianceInventory {
    records: Vec<ApplianceRecord>,
}

impl ApplianceInventory {
    /// Create an empty inventory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated record
    pub fn add(&mut self, record: ApplianceRecord) {
        self.records.push(record);
    }

    /// Remove the entry at `index` (0-based), returning it
    pub fn remove(&mut self, index: usize) -> crate::Result<ApplianceRecord> {
        if index >= self.records.len() {
            return Err(WattcastError::validation(
                "Please select an appliance to remove.",
            ));
        }
        Ok(self.records.remove(index))
    }

    /// Entries in insertion order
    #[must_use]
    pub fn records(&self) -> &[ApplianceRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 1-indexed summary lines for rendering the inventory as a list
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record.summary()))
            .collect()
    }
}
