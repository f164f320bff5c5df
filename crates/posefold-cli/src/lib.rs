//! # Posefold CLI
//!
//! Console driver around [`posefold_core`]: collects yaw/pitch/roll/length
//! steps from a reader, folds them into a final pose and prints the result.
//!
//! ## Modules
//!
//! - [`config`]: YAML-loadable driver configuration
//! - [`error`]: Error types for configuration and input
//! - [`input`]: Interactive and batch step collection with validation
//! - [`report`]: Console rendering of steps, orientation and displacement
//! - [`driver`]: Collect, accumulate, report

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod driver;

pub use config::{DriverConfig, InputMode, ReportConfig};
pub use driver::run;
pub use error::{CliError, ConfigError, InputError};
