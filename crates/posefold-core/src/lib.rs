//! # Posefold Core
//!
//! Dead-reckoning pose accumulation from yaw/pitch/roll/length steps.
//!
//! Each [`Step`] means "rotate by (yaw, pitch, roll), then move `length`
//! along the new heading". Folding a sequence of steps over the identity
//! [`Pose`] yields a cumulative orientation and position.
//!
//! ## Modules
//!
//! - [`math`]: Elementary rotations (Z-Y-X Tait-Bryan) and Euler extraction
//! - [`step`]: The step record supplied by the caller
//! - [`pose`]: Accumulated orientation and position
//! - [`accumulator`]: The per-step state transition and the fold over steps
//!
//! ## Example
//!
//! ```
//! use posefold_core::{accumulate, Pose, Step};
//!
//! let steps = [Step::new(90.0, 0.0, 0.0, 1.0), Step::new(0.0, 0.0, 0.0, 1.0)];
//! let pose = accumulate(Pose::identity(), &steps);
//!
//! assert!((pose.position.y - 2.0).abs() < 1e-12);
//! ```

pub mod math;
pub mod step;
pub mod pose;
pub mod accumulator;

pub use accumulator::{accumulate, accumulate_prefix, trajectory};
pub use math::{extract_euler_angles, EulerAngles};
pub use pose::{Pose, FORWARD};
pub use step::Step;

// Common type aliases
use nalgebra::{Matrix3, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
