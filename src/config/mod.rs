//! Configuration loading for the staff roster.
//!
//! This module loads the data file location and pay rates from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use staff_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load_or_default("./roster.yaml").unwrap();
//! println!("Data file: {}", config.config().storage.data_file);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DATA_FILE, PayRates, RosterConfig, StorageConfig};
