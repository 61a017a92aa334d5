//! Configuration types for the staff roster.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and key
//! is optional and falls back to the defaults below.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The data file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "employ.csv";

/// Pay rates applied by the pay rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayRates {
    /// Paid per course hour taught.
    pub teacher_per_hour: Decimal,
    /// Fixed pay for every administrator.
    pub administrator_fixed: Decimal,
    /// Paid per logistics working day.
    pub logistics_per_day: Decimal,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            teacher_per_hour: Decimal::from(1000),
            administrator_fixed: Decimal::from(5000),
            logistics_per_day: Decimal::from(100),
        }
    }
}

/// Where the roster is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the flat data file, relative to the working directory.
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

/// The complete roster configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Storage settings.
    pub storage: StorageConfig,
    /// Pay rates.
    pub pay: PayRates,
}
