//! Camera position and look-at target.

use glam::{Mat3, Quat, Vec3};

/// Where the camera is and what it looks at, in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Camera position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl CameraPose {
    /// A camera at `position` looking at the world origin.
    pub fn looking_at_origin(position: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
        }
    }

    /// Orientation of the camera (forward is -Z, up is +Y).
    pub fn rotation(&self) -> Quat {
        look_rotation(self.position, self.target)
    }

    /// Unit view direction, zero if the camera sits on its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

/// Rotation that points a camera at `eye` toward `target` with +Y up.
///
/// Falls back to +Z as the up hint when looking straight along the Y axis.
pub fn look_rotation(eye: Vec3, target: Vec3) -> Quat {
    let forward = (target - eye).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let up_hint = if forward.cross(Vec3::Y).length_squared() < 1e-8 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = forward.cross(up_hint).normalize();
    let up = right.cross(forward);
    Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_faces_target() {
        let pose = CameraPose {
            position: Vec3::new(0.0, 0.0, 4.2),
            target: Vec3::new(1.0, 0.5, 0.0),
        };
        let forward = pose.rotation() * Vec3::NEG_Z;
        assert!((forward - pose.forward()).length() < 1e-5);
    }

    #[test]
    fn test_rotation_keeps_up_positive() {
        let pose = CameraPose::looking_at_origin(Vec3::new(3.0, 1.0, 2.0));
        let up = pose.rotation() * Vec3::Y;
        assert!(up.y > 0.0, "camera up should point upward, got {up}");
    }

    #[test]
    fn test_looking_straight_down() {
        let pose = CameraPose::looking_at_origin(Vec3::new(0.0, 5.0, 0.0));
        let forward = pose.rotation() * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_Y).length() < 1e-5);
        assert!(pose.rotation().is_normalized());
    }

    #[test]
    fn test_coincident_eye_and_target() {
        assert_eq!(look_rotation(Vec3::ONE, Vec3::ONE), Quat::IDENTITY);
    }
}
