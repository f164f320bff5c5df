//! Motion Model Validation Tests
//!
//! End-to-end checks of the pose accumulation model:
//! 1. Null and empty inputs leave the identity pose untouched
//! 2. Orientation stays a proper rotation over long sequences
//! 3. Single-axis steps round-trip through Euler extraction
//! 4. Rotation composition is order sensitive
//! 5. Displacement follows the updated heading

use approx::assert_relative_eq;
use nalgebra::{Matrix3, Vector3};

use posefold_core::math::{is_rotation_matrix, pitch_matrix, yaw_matrix};
use posefold_core::{accumulate, extract_euler_angles, trajectory, Pose, Step};

/// Deterministic, irregular step sequence covering all angle quadrants
fn wandering_steps(count: usize) -> Vec<Step> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Step::new(
                (t * 1.7).sin() * 180.0,
                (t * 0.9).cos() * 85.0,
                (t * 2.3).sin() * 270.0,
                (t * 0.37).cos() * 4.0,
            )
        })
        .collect()
}

mod identity_tests {
    use super::*;

    #[test]
    fn test_null_step_from_identity() {
        let pose = accumulate(Pose::identity(), &[Step::new(0.0, 0.0, 0.0, 0.0)]);
        assert_eq!(pose, Pose::identity());
    }

    #[test]
    fn test_empty_sequence_is_identity() {
        let pose = accumulate(Pose::identity(), &[]);
        assert_eq!(pose.orientation, Matrix3::identity());
        assert_eq!(pose.position, Vector3::zeros());
    }
}

/// Rᵀ·R = I and det(R) = 1 after any finite sequence
mod orthonormality_tests {
    use super::*;

    #[test]
    fn test_long_sequence_stays_orthonormal() {
        let steps = wandering_steps(500);
        let pose = accumulate(Pose::identity(), &steps);

        assert_relative_eq!(
            pose.orientation.transpose() * pose.orientation,
            Matrix3::identity(),
            epsilon = 1e-9
        );
        assert_relative_eq!(pose.orientation.determinant(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_every_intermediate_pose_is_orthonormal() {
        for pose in trajectory(Pose::identity(), &wandering_steps(100)) {
            assert!(is_rotation_matrix(&pose.orientation, 1e-9));
            assert!(pose.position.iter().all(|e| e.is_finite()));
        }
    }

    #[test]
    fn test_displacement_magnitude_bounded_by_path_length() {
        let steps = wandering_steps(50);
        let path_length: f64 = steps.iter().map(|s| s.length.abs()).sum();
        let pose = accumulate(Pose::identity(), &steps);

        assert!(pose.position.norm() <= path_length + 1e-9);
    }
}

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_single_yaw_matches_elementary_matrix() {
        for theta in [-135.0, -45.0, 10.0, 90.0, 179.0] {
            let pose = accumulate(Pose::identity(), &[Step::turn(theta, 0.0, 0.0)]);
            assert_relative_eq!(pose.orientation, yaw_matrix(theta), epsilon = 1e-15);

            let angles = extract_euler_angles(&pose.orientation);
            assert_relative_eq!(angles.yaw, theta, epsilon = 1e-9);
            assert_relative_eq!(angles.pitch, 0.0, epsilon = 1e-9);
            assert_relative_eq!(angles.roll, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_yaw_180_is_ambiguous_in_sign_only() {
        let pose = accumulate(Pose::identity(), &[Step::turn(180.0, 0.0, 0.0)]);
        let angles = pose.euler_angles();
        assert_relative_eq!(angles.yaw.abs(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_successive_yaws_add_up() {
        let steps = [Step::turn(20.0, 0.0, 0.0), Step::turn(25.0, 0.0, 0.0)];
        let angles = accumulate(Pose::identity(), &steps).euler_angles();
        assert_relative_eq!(angles.yaw, 45.0, epsilon = 1e-9);
    }
}

mod composition_order_tests {
    use super::*;

    #[test]
    fn test_yaw_then_pitch_differs_from_pitch_then_yaw() {
        let a = Step::turn(90.0, 0.0, 0.0);
        let b = Step::turn(0.0, 90.0, 0.0);

        let ab = accumulate(Pose::identity(), &[a, b]);
        let ba = accumulate(Pose::identity(), &[b, a]);

        assert!((ab.orientation - ba.orientation).norm() > 1.0);
        assert_relative_eq!(ab.orientation, yaw_matrix(90.0) * pitch_matrix(90.0), epsilon = 1e-12);
        assert_relative_eq!(ba.orientation, pitch_matrix(90.0) * yaw_matrix(90.0), epsilon = 1e-12);
    }

    #[test]
    fn test_one_step_equals_three_single_axis_steps() {
        let combined = accumulate(Pose::identity(), &[Step::turn(30.0, 40.0, 50.0)]);
        let split = accumulate(
            Pose::identity(),
            &[Step::turn(30.0, 0.0, 0.0), Step::turn(0.0, 40.0, 0.0), Step::turn(0.0, 0.0, 50.0)],
        );
        assert_relative_eq!(combined.orientation, split.orientation, epsilon = 1e-12);
    }
}

mod displacement_tests {
    use super::*;

    #[test]
    fn test_forward_from_identity() {
        let pose = accumulate(Pose::identity(), &[Step::new(0.0, 0.0, 0.0, 5.0)]);
        assert_relative_eq!(pose.position, Vector3::new(5.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_forward_after_quarter_yaw() {
        let pose = accumulate(Pose::identity(), &[Step::new(90.0, 0.0, 0.0, 5.0)]);
        assert_relative_eq!(pose.position, Vector3::new(0.0, 5.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_two_step_example() {
        let steps = [Step::new(90.0, 0.0, 0.0, 1.0), Step::new(0.0, 0.0, 0.0, 1.0)];
        let pose = accumulate(Pose::identity(), &steps);

        assert_relative_eq!(pose.position, Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(pose.orientation, yaw_matrix(90.0), epsilon = 1e-12);
    }

    #[test]
    fn test_square_returns_to_origin() {
        let side = Step::new(90.0, 0.0, 0.0, 2.0);
        let pose = accumulate(Pose::identity(), &[side; 4]);

        assert_relative_eq!(pose.position, Vector3::zeros(), epsilon = 1e-12);
        assert_relative_eq!(pose.orientation, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_climb_after_pitch_down() {
        // Negative pitch tilts the nose toward +z
        let pose = accumulate(Pose::identity(), &[Step::new(0.0, -30.0, 0.0, 2.0)]);
        assert_relative_eq!(pose.position.x, 3f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(pose.position.z, 1.0, epsilon = 1e-12);
    }
}
