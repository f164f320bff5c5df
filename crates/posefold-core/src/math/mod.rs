//! Mathematical utilities for posefold
//!
//! Elementary axis rotations, their yaw-pitch-roll composition,
//! and the inverse Euler angle decomposition.

pub mod rotation;
pub mod euler;

pub use rotation::*;
pub use euler::*;
