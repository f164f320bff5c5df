//! Pose accumulation
//!
//! One state transition per step, applied strictly in order:
//!
//! ```text
//! R' = R * (R_yaw * R_pitch * R_roll)
//! p' = p + length * (R' * e₁)
//! ```
//!
//! The displacement uses the updated orientation R', i.e. the body turns
//! first and then moves along its new heading.
//!
//! Non-finite angles or lengths are not rejected; they propagate into every
//! later pose.

use log::trace;

use crate::pose::Pose;
use crate::step::Step;

impl Pose {
    /// Apply one step in place
    pub fn apply(&mut self, step: &Step) {
        self.orientation *= step.rotation();
        let heading = self.heading();
        self.position += heading * step.length;

        trace!(
            "step yaw={:.3} pitch={:.3} roll={:.3} length={:.3} -> position=[{:.3}, {:.3}, {:.3}]",
            step.yaw,
            step.pitch,
            step.roll,
            step.length,
            self.position.x,
            self.position.y,
            self.position.z,
        );
    }

    /// Return the pose after applying `step`, leaving `self` untouched
    pub fn after(&self, step: &Step) -> Pose {
        let mut next = *self;
        next.apply(step);
        next
    }
}

/// Fold `steps` over `initial` in sequence order
///
/// An empty slice returns `initial` unchanged.
pub fn accumulate(initial: Pose, steps: &[Step]) -> Pose {
    steps.iter().fold(initial, |pose, step| pose.after(step))
}

/// Replay only the first `count` steps
///
/// Applied steps cannot be rolled back, so "undo" means replaying a
/// truncated sequence from the same start. `count` larger than the
/// sequence replays all of it.
pub fn accumulate_prefix(initial: Pose, steps: &[Step], count: usize) -> Pose {
    accumulate(initial, &steps[..count.min(steps.len())])
}

/// Pose after each step
///
/// Element `i` is the pose once steps `0..=i` have been applied. The last
/// element, if any, equals [`accumulate`] over the same input.
pub fn trajectory(initial: Pose, steps: &[Step]) -> Vec<Pose> {
    let mut pose = initial;
    steps
        .iter()
        .map(|step| {
            pose.apply(step);
            pose
        })
        .collect()
}
