//! posefold - fold yaw/pitch/roll/length steps into a final pose
//!
//! # Usage
//!
//! ```bash
//! # Interactive prompts, CTRL-D to finish
//! posefold
//!
//! # One "yaw pitch roll length" line per step
//! posefold --batch < steps.txt
//!
//! # With a config file and per-step poses
//! posefold --config posefold.yaml --trajectory
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use posefold_cli::{run, DriverConfig, InputMode};

/// Accumulate a sequence of yaw/pitch/roll rotations and forward moves
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read one "yaw pitch roll length" line per step instead of prompting
    #[arg(short, long)]
    batch: bool,

    /// Do not echo the entered steps
    #[arg(short, long)]
    quiet: bool,

    /// Print the pose after every step
    #[arg(short, long)]
    trajectory: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match DriverConfig::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DriverConfig::default(),
    };

    if args.batch {
        config.input.mode = InputMode::Batch;
    }
    if args.quiet {
        config.report.echo_steps = false;
    }
    if args.trajectory {
        config.report.show_trajectory = true;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run(&config, stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
