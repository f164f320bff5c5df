//! Error types
//!
//! The numerical core has no failure modes; everything that can go wrong
//! happens while loading configuration or reading steps.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Step field being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Yaw,
    Pitch,
    Roll,
    Length,
}

impl Field {
    /// Fields in the order they are entered
    pub const ALL: [Field; 4] = [Field::Yaw, Field::Pitch, Field::Roll, Field::Length];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Yaw => "Yaw",
            Field::Pitch => "Pitch",
            Field::Roll => "Roll",
            Field::Length => "Length",
        };
        f.write_str(name)
    }
}

/// Step input errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: {field} value {value:?} is not a number")]
    InvalidNumber {
        field: Field,
        value: String,
        line: usize,
    },
    #[error("line {line}: {field} value {value} is not finite")]
    NonFinite { field: Field, value: f64, line: usize },
    #[error("line {line}: expected 4 values (yaw pitch roll length), got {found}")]
    WrongFieldCount { line: usize, found: usize },
    #[error("input ended while waiting for {field}")]
    UnexpectedEof { field: Field },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Top-level driver errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Input error: {0}")]
    Input(#[from] InputError),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
