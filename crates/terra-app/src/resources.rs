//! ECS resources owned by the per-frame systems.

use bevy_ecs::prelude::*;
use chrono::{DateTime, Utc};
use crossbeam_channel::Receiver;
use glam::Vec3;
use terra_coords::Marker;
use terra_planet::{CloudSpin, DayNightUniform, OrientationSynchronizer, PlanetPose, StartupFade};
use terra_player::{Arrival, CameraPilot, CameraPose, OrbitControls, PilotUpdate};
use tracing::debug;

use crate::fade_overlay::FadeOverlay;

/// Timing handed to the schedule by the driver before each run.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FrameInput {
    /// Wall-clock instant sampled for this frame.
    pub wall_now: DateTime<Utc>,
    /// Seconds since the previous frame, already clamped by the frame loop.
    pub delta: f64,
}

/// Frame timing as seen by the systems.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FrameClock {
    pub wall_now: DateTime<Utc>,
    pub delta: f64,
    /// Monotonic seconds since startup. Drives flights and fades.
    pub elapsed: f64,
    /// Number of frames run so far, including this one.
    pub frame: u64,
}

impl FrameClock {
    pub fn starting_at(wall_now: DateTime<Utc>) -> Self {
        Self {
            wall_now,
            delta: 0.0,
            elapsed: 0.0,
            frame: 0,
        }
    }
}

/// Orientation synchronizer and the pose it produced this frame.
#[derive(Resource, Debug)]
pub struct GlobeState {
    pub synchronizer: OrientationSynchronizer,
    pub pose: PlanetPose,
}

/// Cloud shell spin.
#[derive(Resource, Debug)]
pub struct Clouds {
    pub spin: CloudSpin,
}

/// Loading signal from the asset collaborator.
#[derive(Resource, Clone, Copy, Debug)]
pub struct LoadingState {
    /// `true` while textures are still loading.
    pub loading: bool,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { loading: true }
    }
}

/// Startup fade plus the per-frame parameters handed to the globe shader.
#[derive(Resource, Debug)]
pub struct Shading {
    pub fade: StartupFade,
    pub ambient: f32,
    /// Fixed world-space light direction.
    pub world_sun_direction: Vec3,
    pub uniform: DayNightUniform,
}

/// A request to fly the camera to a world-space point, typically the
/// marker the user clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyRequest {
    pub target: Vec3,
}

/// Fly requests received since the last frame. Later requests replace
/// earlier ones when dispatched.
#[derive(Resource, Debug, Default)]
pub struct FlyRequests {
    pub pending: Vec<FlyRequest>,
}

impl FlyRequests {
    pub fn push(&mut self, target: Vec3) {
        self.pending.push(FlyRequest { target });
    }
}

/// Orbit controls driven by the user when no flight is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCameraControls {
    pub enabled: bool,
    pub position: Vec3,
    pub target: Vec3,
}

impl OrbitCameraControls {
    pub fn new(pose: CameraPose) -> Self {
        Self {
            enabled: true,
            position: pose.position,
            target: pose.target,
        }
    }
}

impl OrbitControls for OrbitCameraControls {
    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            debug!(enabled, "orbit controls toggled");
        }
        self.enabled = enabled;
    }

    fn sync_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }
}

/// The camera and the orbit controls attached to it.
#[derive(Resource, Debug)]
pub struct CameraRig {
    pub pose: CameraPose,
    pub controls: OrbitCameraControls,
}

/// The camera pilot and what it did this frame.
#[derive(Resource, Debug)]
pub struct PilotState {
    pub pilot: CameraPilot,
    pub last_update: PilotUpdate,
}

/// Arrival curtain and the channel the pilot's arrival callback feeds.
#[derive(Resource, Debug)]
pub struct ArrivalOverlay {
    pub overlay: FadeOverlay,
    pub arrivals: Receiver<Arrival>,
    pub last_arrival: Option<Arrival>,
}

/// The location marker.
#[derive(Resource, Debug)]
pub struct MarkerState {
    pub marker: Marker,
}

/// Debug knobs read by the systems.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugSettings {
    /// Log the subsolar point every N frames, 0 disables.
    pub log_sun_every_frames: u32,
}
