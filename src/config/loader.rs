//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scanner
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};

use super::types::ScannerConfig;

/// Loads and provides access to roster extraction configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── scanner.yaml   # Date serial floor and employee name pattern
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Date serial floor: {}", loader.scanner().date_serial_floor);
/// # Ok::<(), shift_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    scanner: ScannerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `scanner.yaml` is missing, is not valid YAML, or
    /// holds out-of-range values.
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let scanner_path = path.as_ref().join("scanner.yaml");
        let scanner = Self::load_yaml::<ScannerConfig>(&scanner_path)?;
        Self::validate(&scanner)?;
        Ok(Self { scanner })
    }

    /// Wraps an already-built scanner configuration.
    pub fn from_config(scanner: ScannerConfig) -> RosterResult<Self> {
        Self::validate(&scanner)?;
        Ok(Self { scanner })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(scanner: &ScannerConfig) -> RosterResult<()> {
        if !scanner.date_serial_floor.is_finite() {
            return Err(RosterError::InvalidConfig {
                field: "date_serial_floor".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if scanner.name_pattern.trim().is_empty() {
            return Err(RosterError::InvalidConfig {
                field: "name_pattern".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the scanner configuration.
    pub fn scanner(&self) -> &ScannerConfig {
        &self.scanner
    }
}
