//! SO(3) rotation construction
//!
//! Right-handed elementary rotations about the body axes, with angles
//! given in degrees. Yaw turns about the third (up) axis, pitch about the
//! second, roll about the first.

use nalgebra::Matrix3;

use crate::DEG_TO_RAD;

/// Rotation about the up axis (third coordinate)
///
/// ```text
/// [ cos(y) -sin(y)  0 ]
/// [ sin(y)  cos(y)  0 ]
/// [   0       0     1 ]
/// ```
pub fn yaw_matrix(yaw_deg: f64) -> Matrix3<f64> {
    let (s, c) = (yaw_deg * DEG_TO_RAD).sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Rotation about the second axis
///
/// ```text
/// [ cos(p)  0  sin(p) ]
/// [   0     1    0    ]
/// [-sin(p)  0  cos(p) ]
/// ```
pub fn pitch_matrix(pitch_deg: f64) -> Matrix3<f64> {
    let (s, c) = (pitch_deg * DEG_TO_RAD).sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

/// Rotation about the first (forward) axis
///
/// ```text
/// [ 1    0        0    ]
/// [ 0  cos(r)  -sin(r) ]
/// [ 0  sin(r)   cos(r) ]
/// ```
pub fn roll_matrix(roll_deg: f64) -> Matrix3<f64> {
    let (s, c) = (roll_deg * DEG_TO_RAD).sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

/// Incremental rotation for one step
///
/// R = R_yaw * R_pitch * R_roll
///
/// The product order is fixed: reordering changes the result whenever
/// the three rotations do not commute.
pub fn incremental_rotation(yaw_deg: f64, pitch_deg: f64, roll_deg: f64) -> Matrix3<f64> {
    yaw_matrix(yaw_deg) * pitch_matrix(pitch_deg) * roll_matrix(roll_deg)
}

/// Check that `m` is a proper rotation within `tolerance`
///
/// Requires R^T * R = I and det(R) = 1, each entry compared absolutely.
pub fn is_rotation_matrix(m: &Matrix3<f64>, tolerance: f64) -> bool {
    let gram = m.transpose() * m - Matrix3::identity();
    gram.iter().all(|e| e.abs() <= tolerance) && (m.determinant() - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_zero_angles_are_identity() {
        assert_relative_eq!(yaw_matrix(0.0), Matrix3::identity(), epsilon = 1e-15);
        assert_relative_eq!(pitch_matrix(0.0), Matrix3::identity(), epsilon = 1e-15);
        assert_relative_eq!(roll_matrix(0.0), Matrix3::identity(), epsilon = 1e-15);
        assert_relative_eq!(incremental_rotation(0.0, 0.0, 0.0), Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_yaw_90_turns_x_into_y() {
        let v = yaw_matrix(90.0) * Vector3::x();
        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_pitch_90_turns_x_into_minus_z() {
        let v = pitch_matrix(90.0) * Vector3::x();
        assert_relative_eq!(v, -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_roll_90_turns_y_into_z() {
        let v = roll_matrix(90.0) * Vector3::y();
        assert_relative_eq!(v, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_angles_wrap() {
        assert_relative_eq!(yaw_matrix(370.0), yaw_matrix(10.0), epsilon = 1e-12);
        assert_relative_eq!(roll_matrix(-90.0), roll_matrix(270.0), epsilon = 1e-12);
    }

    #[test]
    fn test_composition_order() {
        let r = incremental_rotation(30.0, 45.0, 60.0);
        let expected = yaw_matrix(30.0) * pitch_matrix(45.0) * roll_matrix(60.0);
        assert_relative_eq!(r, expected, epsilon = 1e-15);

        let reversed = roll_matrix(60.0) * pitch_matrix(45.0) * yaw_matrix(30.0);
        assert!((r - reversed).norm() > 1e-3);
    }

    #[test]
    fn test_elementary_rotations_orthonormal() {
        for angle in [-720.0, -135.0, -1.0, 0.0, 17.5, 90.0, 180.0, 359.0] {
            assert!(is_rotation_matrix(&yaw_matrix(angle), 1e-12));
            assert!(is_rotation_matrix(&pitch_matrix(angle), 1e-12));
            assert!(is_rotation_matrix(&roll_matrix(angle), 1e-12));
        }
        assert!(is_rotation_matrix(&incremental_rotation(12.0, -77.0, 140.0), 1e-12));
    }

    #[test]
    fn test_reflection_is_not_rotation() {
        let reflection = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, -1.0));
        assert!(!is_rotation_matrix(&reflection, 1e-9));

        let scaled = Matrix3::identity() * 2.0;
        assert!(!is_rotation_matrix(&scaled, 1e-9));
    }
}
