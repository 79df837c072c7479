//! Orientation synchronizer: turns the globe so the real sun lines up with
//! the scene's fixed light.
//!
//! The light never moves. Each frame the sun direction is recomputed in the
//! Earth-fixed frame and the planet root is rotated so that direction lands
//! on the fixed world-space light direction. Everything parented to the root
//! (day/night sphere, atmosphere, clouds, marker) inherits the rotation.

use chrono::{DateTime, Utc};
use glam::{DQuat, DVec3};
use terra_config::GlobeConfig;
use terra_solar::compute_sun_direction;
use tracing::{trace, warn};

use crate::clock::SimClock;

/// Immutable settings the synchronizer is constructed with.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientationSettings {
    /// Fixed world-space direction toward the light (unit length).
    pub world_sun_direction: DVec3,
    /// Multiplier on elapsed real time.
    pub time_scale: f64,
    /// Static correction about the body +Y axis aligning the texture seam, degrees.
    pub texture_longitude_offset_deg: f64,
    /// Static tilt about the body +Z axis, degrees.
    pub axial_tilt_deg: f64,
    /// Cloud shell revolution period before the multiplier, hours.
    pub cloud_period_hours: f64,
    /// Cloud shell speed multiplier.
    pub cloud_speed_multiplier: f64,
}

impl Default for OrientationSettings {
    fn default() -> Self {
        Self::from_config(&GlobeConfig::default())
    }
}

impl OrientationSettings {
    /// Build settings from the globe section of the config.
    ///
    /// A zero-length light direction falls back to +X.
    pub fn from_config(config: &GlobeConfig) -> Self {
        let [x, y, z] = config.world_sun_direction;
        let direction = DVec3::new(x, y, z);
        let world_sun_direction = direction.try_normalize().unwrap_or_else(|| {
            warn!(?direction, "world sun direction has no length, using +X");
            DVec3::X
        });
        Self {
            world_sun_direction,
            time_scale: config.time_scale,
            texture_longitude_offset_deg: config.texture_longitude_offset_deg,
            axial_tilt_deg: config.axial_tilt_deg,
            cloud_period_hours: config.cloud_period_hours,
            cloud_speed_multiplier: config.cloud_speed_multiplier,
        }
    }
}

/// The shortest-arc rotation taking `sun_direction` onto `world_sun_direction`.
///
/// Both inputs must be unit length.
pub fn orientation_for(sun_direction: DVec3, world_sun_direction: DVec3) -> DQuat {
    DQuat::from_rotation_arc(sun_direction, world_sun_direction)
}

/// Rotations to apply to the planet's transform layers for one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetPose {
    /// Simulated instant the pose was computed for.
    pub instant: DateTime<Utc>,
    /// Sun direction in the Earth-fixed frame at `instant`.
    pub sun_direction: DVec3,
    /// Solar rotation applied to the planet root.
    pub root: DQuat,
    /// Static axial tilt, child of the root.
    pub tilt: DQuat,
    /// Static texture seam correction, applied to textured meshes only.
    pub surface: DQuat,
}

impl PlanetPose {
    /// Rotation from the Earth-fixed body frame to world space.
    pub fn world_from_body(&self) -> DQuat {
        self.root * self.tilt
    }

    /// Rotation applied to textured meshes (day/night sphere, clouds).
    pub fn mesh_rotation(&self) -> DQuat {
        self.world_from_body() * self.surface
    }

    /// World-space position of a point given in the Earth-fixed frame.
    pub fn to_world(&self, body_point: DVec3) -> DVec3 {
        self.world_from_body() * body_point
    }
}

/// Recomputes the planet orientation from the current simulated time.
#[derive(Clone, Debug)]
pub struct OrientationSynchronizer {
    settings: OrientationSettings,
    clock: SimClock,
    tilt: DQuat,
    surface: DQuat,
}

impl OrientationSynchronizer {
    /// Create a synchronizer whose simulated clock starts at `wall_now`.
    pub fn new(settings: OrientationSettings, wall_now: DateTime<Utc>) -> Self {
        let clock = SimClock::new(wall_now, settings.time_scale);
        Self::with_clock(settings, clock)
    }

    /// Create a synchronizer driven by an explicit simulated clock.
    pub fn with_clock(settings: OrientationSettings, clock: SimClock) -> Self {
        let tilt = DQuat::from_rotation_z(settings.axial_tilt_deg.to_radians());
        let surface = DQuat::from_rotation_y(settings.texture_longitude_offset_deg.to_radians());
        Self {
            settings,
            clock,
            tilt,
            surface,
        }
    }

    /// Settings this synchronizer was built with.
    pub fn settings(&self) -> &OrientationSettings {
        &self.settings
    }

    /// The simulated clock.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Change the time scale without jumping the simulated instant.
    pub fn set_time_scale(&mut self, time_scale: f64, wall_now: DateTime<Utc>) {
        self.clock.set_time_scale(time_scale, wall_now);
        self.settings.time_scale = time_scale;
    }

    /// Pose of the planet at a simulated instant. Pure.
    pub fn orientation_at(&self, instant: DateTime<Utc>) -> PlanetPose {
        let sun_direction = compute_sun_direction(instant);
        let root = orientation_for(sun_direction, self.settings.world_sun_direction);
        PlanetPose {
            instant,
            sun_direction,
            root,
            tilt: self.tilt,
            surface: self.surface,
        }
    }

    /// Sample the simulated clock at `wall_now` and compute the pose.
    pub fn sync(&self, wall_now: DateTime<Utc>) -> PlanetPose {
        let instant = self.clock.now(wall_now);
        let pose = self.orientation_at(instant);
        trace!(%instant, sun = ?pose.sun_direction, "planet orientation synced");
        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use terra_coords::lat_lon_to_vec3;
    use terra_solar::subsolar_point;

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn synchronizer() -> OrientationSynchronizer {
        OrientationSynchronizer::new(OrientationSettings::default(), utc(2024, 1, 1, 0))
    }

    #[test]
    fn test_rotation_maps_sun_onto_world_light() {
        let sync = synchronizer();
        let start = utc(2023, 1, 1, 0);
        for i in 0..200 {
            let instant = start + Duration::hours(i * 43 + 5);
            let pose = sync.orientation_at(instant);
            let mapped = pose.root * pose.sun_direction;
            let err = (mapped - sync.settings().world_sun_direction).length();
            assert!(err < 1e-9, "round-trip error {err} at {instant}");
        }
    }

    #[test]
    fn test_custom_world_light_direction() {
        let config = GlobeConfig {
            world_sun_direction: [1.0, 0.5, -2.0],
            ..GlobeConfig::default()
        };
        let settings = OrientationSettings::from_config(&config);
        assert!((settings.world_sun_direction.length() - 1.0).abs() < 1e-12);

        let sync = OrientationSynchronizer::new(settings, utc(2024, 1, 1, 0));
        let pose = sync.orientation_at(utc(2024, 8, 1, 17));
        let mapped = pose.root * pose.sun_direction;
        assert!((mapped - sync.settings().world_sun_direction).length() < 1e-9);
    }

    #[test]
    fn test_zero_world_light_falls_back() {
        let config = GlobeConfig {
            world_sun_direction: [0.0, 0.0, 0.0],
            ..GlobeConfig::default()
        };
        let settings = OrientationSettings::from_config(&config);
        assert_eq!(settings.world_sun_direction, DVec3::X);
    }

    #[test]
    fn test_subsolar_point_faces_the_light() {
        let sync = synchronizer();
        let instant = utc(2024, 6, 21, 0);
        let pose = sync.orientation_at(instant);
        let (lat, lon) = subsolar_point(instant);
        let subsolar_world = pose.to_world(lat_lon_to_vec3(lat, lon, 1.0));
        let facing = subsolar_world.dot(sync.settings().world_sun_direction);
        assert!(facing > 1.0 - 1e-9, "subsolar point faces light by {facing}");
    }

    #[test]
    fn test_antisolar_point_faces_away() {
        let sync = synchronizer();
        let instant = utc(2024, 3, 20, 12);
        let pose = sync.orientation_at(instant);
        let (lat, lon) = subsolar_point(instant);
        let antisolar = pose.to_world(lat_lon_to_vec3(-lat, lon + 180.0, 1.0));
        assert!(antisolar.dot(sync.settings().world_sun_direction) < -1.0 + 1e-9);
    }

    #[test]
    fn test_sync_uses_scaled_clock() {
        let wall_start = utc(2024, 1, 1, 0);
        let settings = OrientationSettings {
            time_scale: 3600.0,
            ..OrientationSettings::default()
        };
        let sync = OrientationSynchronizer::new(settings, wall_start);
        let pose = sync.sync(wall_start + Duration::seconds(6));
        assert_eq!(pose.instant, utc(2024, 1, 1, 6));
        assert_eq!(pose, sync.orientation_at(utc(2024, 1, 1, 6)));
    }

    #[test]
    fn test_frozen_clock_keeps_pose() {
        let wall_start = utc(2024, 1, 1, 0);
        let settings = OrientationSettings {
            time_scale: 0.0,
            ..OrientationSettings::default()
        };
        let sync = OrientationSynchronizer::new(settings, wall_start);
        let a = sync.sync(wall_start + Duration::minutes(5));
        let b = sync.sync(wall_start + Duration::hours(9));
        assert_eq!(a.root, b.root);
    }

    #[test]
    fn test_static_layers_do_not_affect_root() {
        let config = GlobeConfig {
            texture_longitude_offset_deg: 90.0,
            axial_tilt_deg: 0.0,
            ..GlobeConfig::default()
        };
        let plain = synchronizer();
        let offset = OrientationSynchronizer::new(
            OrientationSettings::from_config(&config),
            utc(2024, 1, 1, 0),
        );
        let instant = utc(2024, 10, 10, 10);
        let a = plain.orientation_at(instant);
        let b = offset.orientation_at(instant);
        assert_eq!(a.root, b.root);
        assert_eq!(a.world_from_body(), b.world_from_body());
        let x_after = b.surface * DVec3::X;
        assert!((x_after - DVec3::NEG_Z).length() < 1e-12);
    }

    #[test]
    fn test_set_time_scale_keeps_instant() {
        let wall_start = utc(2024, 1, 1, 0);
        let mut sync = synchronizer();
        let before = sync.sync(wall_start + Duration::minutes(1)).instant;
        sync.set_time_scale(100.0, wall_start + Duration::minutes(1));
        assert_eq!(sync.sync(wall_start + Duration::minutes(1)).instant, before);
        assert_eq!(sync.settings().time_scale, 100.0);
    }
}
