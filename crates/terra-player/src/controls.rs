//! Seam between the camera pilot and whatever orbit/zoom controls the host has.

use glam::Vec3;

/// External orbit-control collaborator.
///
/// The pilot disables it for the duration of a flight so user input does not
/// fight the interpolation, and mirrors every computed pose into it so the
/// controls resume from the right place.
pub trait OrbitControls {
    /// Enable or disable user-driven orbit, zoom and pan.
    fn set_enabled(&mut self, enabled: bool);

    /// Mirror the camera pose into the controls. Optional.
    fn sync_pose(&mut self, _position: Vec3, _target: Vec3) {}
}

/// Controls stand-in for hosts that have none.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoControls;

impl OrbitControls for NoControls {
    fn set_enabled(&mut self, _enabled: bool) {}
}
