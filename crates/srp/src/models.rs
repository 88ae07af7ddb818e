//! Data model for the payroll example.

use serde::{Deserialize, Serialize};

/// A worker record: just enough state to compute a pay figure.
///
/// Lives in memory for the duration of a demonstration run and is only
/// ever produced by the [`crate::EmployeeRepository`] stand-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    /// Identifying key used for repository lookups.
    pub registry_number: u64,
    /// Hourly compensation rate.
    pub value_hour: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, registry_number: u64, value_hour: f64) -> Self {
        Self {
            name: name.into(),
            registry_number,
            value_hour,
        }
    }
}
