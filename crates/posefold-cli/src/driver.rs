//! Collect, accumulate, report

use std::io::{BufRead, Write};

use log::{debug, warn};
use posefold_core::{trajectory, Pose};

use crate::config::DriverConfig;
use crate::error::CliError;
use crate::input::collect_steps;
use crate::report::Report;

/// Run the whole pipeline once
///
/// Steps are read from `reader`; prompts and the report go to `out`.
/// Returns the final pose.
pub fn run<R: BufRead, W: Write>(
    config: &DriverConfig,
    reader: R,
    out: &mut W,
) -> Result<Pose, CliError> {
    let steps = collect_steps(config.input.mode, reader, out)?;

    let poses = trajectory(Pose::identity(), &steps);
    let final_pose = poses.last().copied().unwrap_or_default();
    debug!("Final pose: {:?}", final_pose);

    let tolerance = config.report.orthonormality_tolerance;
    if !final_pose.is_orthonormal(tolerance) {
        warn!(
            "Final orientation deviates from a rotation matrix by more than {:e}",
            tolerance
        );
    }

    Report::new(&steps, &final_pose, &poses).write_to(out, &config.report)?;
    out.flush()?;

    Ok(final_pose)
}
