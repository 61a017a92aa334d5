//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! configuration from a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{RosterError, RosterResult};

use super::types::RosterConfig;

/// Loads and provides access to the roster configuration.
///
/// # File Format
///
/// ```text
/// storage:
///   data_file: employ.csv
/// pay:
///   teacher_per_hour: 1000
///   administrator_fixed: 5000
///   logistics_per_day: 100
/// ```
///
/// # Example
///
/// ```no_run
/// use staff_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./roster.yaml")?;
/// println!("Data file: {}", loader.config().storage.data_file);
/// # Ok::<(), staff_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for the configuration (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|message| RosterError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Loads configuration from the file, or returns the defaults if the
    /// file does not exist. Parse errors are still reported.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            _ => Self::load(path),
        }
    }

    fn from_yaml(content: &str) -> Result<Self, String> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RosterConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> RosterConfig {
        self.config
    }
}
