//! Step record
//!
//! One "rotate, then move forward" instruction. Steps carry no identity
//! beyond their position in the sequence handed to the accumulator.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::math::incremental_rotation;

/// Rotation by (yaw, pitch, roll) followed by a forward displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Step {
    /// Rotation about the up axis [deg]
    pub yaw: f64,
    /// Rotation about the second axis [deg]
    pub pitch: f64,
    /// Rotation about the forward axis [deg]
    pub roll: f64,
    /// Signed displacement along the new heading
    pub length: f64,
}

impl Step {
    pub fn new(yaw: f64, pitch: f64, roll: f64, length: f64) -> Self {
        Self { yaw, pitch, roll, length }
    }

    /// Pure rotation, no displacement
    pub fn turn(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self::new(yaw, pitch, roll, 0.0)
    }

    /// Pure displacement along the current heading
    pub fn forward(length: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, length)
    }

    /// Incremental rotation R_yaw * R_pitch * R_roll for this step
    pub fn rotation(&self) -> Matrix3<f64> {
        incremental_rotation(self.yaw, self.pitch, self.roll)
    }

    /// True when all four fields are finite
    ///
    /// The accumulator never checks this; callers that collect steps
    /// from untrusted input are expected to.
    pub fn is_finite(&self) -> bool {
        self.yaw.is_finite() && self.pitch.is_finite() && self.roll.is_finite() && self.length.is_finite()
    }
}
