//! Euler angle extraction
//!
//! Inverse of the yaw-pitch-roll composition used by
//! [`incremental_rotation`](super::incremental_rotation).

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::RAD_TO_DEG;

/// Yaw, pitch and roll in degrees (Z-Y-X order)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the up axis [deg]
    pub yaw: f64,
    /// Rotation about the second axis [deg]
    pub pitch: f64,
    /// Rotation about the forward axis [deg]
    pub roll: f64,
}

impl EulerAngles {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }
}

/// Decompose a rotation matrix into yaw/pitch/roll
///
/// ```text
/// yaw   = atan2(R10, R00)
/// pitch = atan2(-R20, sqrt(R21² + R22²))
/// roll  = atan2(R21, R22)
/// ```
///
/// Yaw and roll lie in (-180, 180], pitch in [-90, 90]. Near pitch = ±90
/// (gimbal lock) yaw and roll are not unique; no error is raised there and
/// `atan2(0, 0)` evaluates to 0.
pub fn extract_euler_angles(r: &Matrix3<f64>) -> EulerAngles {
    let yaw = r[(1, 0)].atan2(r[(0, 0)]);
    let pitch = (-r[(2, 0)]).atan2(r[(2, 1)].hypot(r[(2, 2)]));
    let roll = r[(2, 1)].atan2(r[(2, 2)]);

    EulerAngles {
        yaw: yaw * RAD_TO_DEG,
        pitch: pitch * RAD_TO_DEG,
        roll: roll * RAD_TO_DEG,
    }
}
