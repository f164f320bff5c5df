//! Console report
//!
//! Renders the collected steps, the final rotation matrix with its
//! yaw/pitch/roll decomposition, and the final displacement.

use std::io::{self, Write};

use posefold_core::{Pose, Step};

use crate::config::ReportConfig;

/// Format `value` with `precision` decimals, printing negative zero as zero
pub fn fixed(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Everything shown once accumulation has finished
pub struct Report<'a> {
    pub steps: &'a [Step],
    pub final_pose: &'a Pose,
    /// Pose after each step, only rendered when configured
    pub trajectory: &'a [Pose],
}

impl<'a> Report<'a> {
    pub fn new(steps: &'a [Step], final_pose: &'a Pose, trajectory: &'a [Pose]) -> Self {
        Self { steps, final_pose, trajectory }
    }

    pub fn write_to<W: Write>(&self, out: &mut W, config: &ReportConfig) -> io::Result<()> {
        if config.echo_steps {
            self.write_steps(out, config)?;
        }
        if config.show_trajectory {
            self.write_trajectory(out, config)?;
        }
        self.write_rotation(out, config)?;
        self.write_displacement(out, config)
    }

    fn write_steps<W: Write>(&self, out: &mut W, config: &ReportConfig) -> io::Result<()> {
        let p = config.matrix_precision;
        writeln!(out, "\nEntered info into the list")?;
        for step in self.steps {
            writeln!(
                out,
                "\nYaw: {}, Pitch: {}, Roll: {}, Length: {}",
                fixed(step.yaw, p),
                fixed(step.pitch, p),
                fixed(step.roll, p),
                fixed(step.length, p),
            )?;
        }
        Ok(())
    }

    fn write_trajectory<W: Write>(&self, out: &mut W, config: &ReportConfig) -> io::Result<()> {
        let (p, a) = (config.matrix_precision, config.angle_precision);
        writeln!(out, "\nPose after each step:")?;
        for (index, pose) in self.trajectory.iter().enumerate() {
            let angles = pose.euler_angles();
            writeln!(
                out,
                "  {:>3}: position [{}, {}, {}]  yaw {}, pitch {}, roll {}",
                index + 1,
                fixed(pose.position.x, p),
                fixed(pose.position.y, p),
                fixed(pose.position.z, p),
                fixed(angles.yaw, a),
                fixed(angles.pitch, a),
                fixed(angles.roll, a),
            )?;
        }
        Ok(())
    }

    fn write_rotation<W: Write>(&self, out: &mut W, config: &ReportConfig) -> io::Result<()> {
        let p = config.matrix_precision;
        let r = &self.final_pose.orientation;
        let cell = |i: usize, j: usize| fixed(r[(i, j)], p);

        writeln!(out, "\nResulting rotation:")?;
        writeln!(
            out,
            "\nNote, the rotations are applied in the following order: yaw, pitch, roll."
        )?;
        writeln!(out, "     [\t{},\t{},\t{}", cell(0, 0), cell(0, 1), cell(0, 2))?;
        writeln!(out, "\t{},\t{},\t{}", cell(1, 0), cell(1, 1), cell(1, 2))?;
        writeln!(out, "\t{},\t{},\t{}  ]", cell(2, 0), cell(2, 1), cell(2, 2))?;

        let a = config.angle_precision;
        let angles = self.final_pose.euler_angles();
        writeln!(out, "Yaw =\t{},", fixed(angles.yaw, a))?;
        writeln!(out, "Pitch =\t{},", fixed(angles.pitch, a))?;
        writeln!(out, "Roll =\t{},", fixed(angles.roll, a))?;
        writeln!(out)
    }

    fn write_displacement<W: Write>(&self, out: &mut W, config: &ReportConfig) -> io::Result<()> {
        let p = config.matrix_precision;
        let v = &self.final_pose.position;
        writeln!(out, "Resulting displacement:")?;
        writeln!(
            out,
            "     [\t{},\t{},\t{} ]",
            fixed(v.x, p),
            fixed(v.y, p),
            fixed(v.z, p)
        )
    }
}
