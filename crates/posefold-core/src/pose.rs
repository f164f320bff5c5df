//! Accumulated pose
//!
//! Orientation as a 3x3 rotation matrix plus a position vector, both
//! expressed in the starting frame.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::math::{extract_euler_angles, is_rotation_matrix, EulerAngles};

/// Body-frame forward axis e₁
pub const FORWARD: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);

/// Cumulative orientation and position
///
/// Starts at the identity and is advanced once per step by
/// [`Pose::apply`](crate::accumulator). The orientation stays orthonormal
/// because it is only ever multiplied by rotation matrices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Body-to-start-frame rotation
    pub orientation: Matrix3<f64>,
    /// Displacement from the origin
    pub position: Vector3<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// Identity orientation at the origin
    pub fn identity() -> Self {
        Self {
            orientation: Matrix3::identity(),
            position: Vector3::zeros(),
        }
    }

    pub fn new(orientation: Matrix3<f64>, position: Vector3<f64>) -> Self {
        Self { orientation, position }
    }

    /// Current forward direction in the start frame
    ///
    /// heading = R * e₁
    pub fn heading(&self) -> Vector3<f64> {
        self.orientation * FORWARD
    }

    /// Yaw/pitch/roll of the current orientation in degrees
    pub fn euler_angles(&self) -> EulerAngles {
        extract_euler_angles(&self.orientation)
    }

    /// Whether the orientation is still a proper rotation within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        is_rotation_matrix(&self.orientation, tolerance)
    }
}
