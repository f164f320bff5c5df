//! Driver configuration
//!
//! Every section is optional in the YAML file and falls back to its
//! defaults. Command line flags are applied on top in `main`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Full driver configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// How steps are read
    #[serde(default)]
    pub input: InputConfig,
    /// What the final report contains
    #[serde(default)]
    pub report: ReportConfig,
}

impl DriverConfig {
    /// Load from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Step collection style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Prompt for each field, press enter for another step, EOF to finish
    #[default]
    Interactive,
    /// One `yaw pitch roll length` line per step, no prompts
    Batch,
}

/// Input configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub mode: InputMode,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Echo the collected steps before the result
    pub echo_steps: bool,
    /// List the pose after every step
    pub show_trajectory: bool,
    /// Decimals for matrix entries and positions
    pub matrix_precision: usize,
    /// Decimals for Euler angles [deg]
    pub angle_precision: usize,
    /// Orthonormality tolerance before a drift warning is logged
    pub orthonormality_tolerance: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            echo_steps: true,
            show_trajectory: false,
            matrix_precision: 3,
            angle_precision: 1,
            orthonormality_tolerance: 1e-9,
        }
    }
}
