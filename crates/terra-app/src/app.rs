//! The assembled application: an ECS world, its resources and the frame
//! schedule.

use bevy_ecs::prelude::*;
use chrono::{DateTime, Utc};
use glam::{DQuat, DVec3, Vec3};
use terra_config::Config;
use terra_coords::Marker;
use terra_planet::{
    CloudSpin, DayNightUniform, OrientationSettings, OrientationSynchronizer, PlanetPose,
    StartupFade,
};
use terra_player::{Arrival, CameraPilot, CameraPose, FlightState, PilotSettings, PilotUpdate};
use tracing::{debug, info};

use crate::fade_overlay::FadeOverlay;
use crate::resources::{
    ArrivalOverlay, CameraRig, Clouds, DebugSettings, FlyRequests, FrameClock, FrameInput,
    GlobeState, LoadingState, MarkerState, OrbitCameraControls, PilotState, Shading,
};
use crate::systems::build_schedule;

/// What one frame produced.
#[derive(Clone, Copy, Debug)]
pub struct FrameReport {
    pub frame: u64,
    /// Simulated instant the planet was oriented for.
    pub sim_instant: DateTime<Utc>,
    /// Sun direction in the Earth-fixed frame.
    pub sun_direction: DVec3,
    /// Solar rotation applied to the planet root this frame.
    pub root: DQuat,
    pub camera: CameraPose,
    /// Startup fade gain.
    pub gain: f32,
    pub overlay_opacity: f32,
    pub pilot: PilotUpdate,
}

/// The headless globe application.
pub struct TerraApp {
    world: World,
    schedule: Schedule,
}

impl TerraApp {
    /// Build the world from config with the simulated clock starting at `wall_now`.
    pub fn new(config: &Config, wall_now: DateTime<Utc>) -> Self {
        let settings = OrientationSettings::from_config(&config.globe);
        let world_sun_direction = settings.world_sun_direction.as_vec3();
        let clouds = CloudSpin::new(settings.cloud_period_hours, settings.cloud_speed_multiplier);
        let synchronizer = OrientationSynchronizer::new(settings, wall_now);
        let pose = synchronizer.sync(wall_now);

        let (arrival_tx, arrival_rx) = crossbeam_channel::unbounded();
        let pilot = CameraPilot::new(PilotSettings::from_config(&config.globe, &config.pilot))
            .with_on_arrival(Box::new(move |arrival: Arrival| {
                // The receiver lives as long as the world; a send can only
                // fail during teardown.
                let _ = arrival_tx.send(arrival);
            }));

        let camera = CameraPose::looking_at_origin(Vec3::from_array(config.pilot.start_position));
        let ambient = config.shading.ambient;

        let mut world = World::new();
        world.insert_resource(FrameInput {
            wall_now,
            delta: 0.0,
        });
        world.insert_resource(FrameClock::starting_at(wall_now));
        world.insert_resource(GlobeState { synchronizer, pose });
        world.insert_resource(Clouds { spin: clouds });
        world.insert_resource(LoadingState::default());
        world.insert_resource(Shading {
            fade: StartupFade::new(config.shading.fade_in_seconds),
            ambient,
            world_sun_direction,
            uniform: DayNightUniform::new(world_sun_direction, ambient, 0.0),
        });
        world.insert_resource(FlyRequests::default());
        world.insert_resource(CameraRig {
            pose: camera,
            controls: OrbitCameraControls::new(camera),
        });
        world.insert_resource(PilotState {
            pilot,
            last_update: PilotUpdate::default(),
        });
        world.insert_resource(ArrivalOverlay {
            overlay: FadeOverlay::default(),
            arrivals: arrival_rx,
            last_arrival: None,
        });
        world.insert_resource(MarkerState {
            marker: Marker::default_location(
                config.marker.latitude,
                config.marker.longitude,
                config.globe.planet_radius + config.marker.altitude,
            ),
        });
        world.insert_resource(DebugSettings {
            log_sun_every_frames: config.debug.log_sun_every_frames,
        });

        debug!(%wall_now, "terra world initialized");
        Self {
            world,
            schedule: build_schedule(),
        }
    }

    /// Run one frame at wall time `wall_now`, `delta` seconds after the previous one.
    pub fn step(&mut self, wall_now: DateTime<Utc>, delta: f64) -> FrameReport {
        self.world.insert_resource(FrameInput { wall_now, delta });
        self.schedule.run(&mut self.world);
        self.report()
    }

    /// Tell the startup fade whether textures are still loading.
    pub fn set_loading(&mut self, loading: bool) {
        self.world.resource_mut::<LoadingState>().loading = loading;
    }

    /// Queue a flight to a world-space point; it starts on the next frame.
    pub fn request_flight(&mut self, target: Vec3) {
        self.world.resource_mut::<FlyRequests>().push(target);
    }

    /// Queue a flight to where the marker is right now, returning the
    /// world-space target.
    pub fn request_marker_flight(&mut self) -> Vec3 {
        let target = self.marker_world_position();
        info!(target = %target, "flying to marker");
        self.request_flight(target);
        target
    }

    /// Replace the marker with a resolved geolocation.
    pub fn relocate_marker(&mut self, lat_deg: f64, lon_deg: f64) {
        self.world
            .resource_mut::<MarkerState>()
            .marker
            .relocate(lat_deg, lon_deg);
    }

    /// World-space position of the marker under the current planet pose.
    pub fn marker_world_position(&self) -> Vec3 {
        let body = self.world.resource::<MarkerState>().marker.point().position();
        self.pose().to_world(body).as_vec3()
    }

    pub fn pose(&self) -> &PlanetPose {
        &self.world.resource::<GlobeState>().pose
    }

    pub fn camera(&self) -> CameraPose {
        self.world.resource::<CameraRig>().pose
    }

    pub fn controls(&self) -> OrbitCameraControls {
        self.world.resource::<CameraRig>().controls
    }

    pub fn flight_state(&self) -> FlightState {
        *self.world.resource::<PilotState>().pilot.state()
    }

    pub fn cloud_angle(&self) -> f64 {
        self.world.resource::<Clouds>().spin.angle()
    }

    pub fn shading_uniform(&self) -> DayNightUniform {
        self.world.resource::<Shading>().uniform
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn report(&self) -> FrameReport {
        let clock = self.world.resource::<FrameClock>();
        let pose = self.pose();
        FrameReport {
            frame: clock.frame,
            sim_instant: pose.instant,
            sun_direction: pose.sun_direction,
            root: pose.root,
            camera: self.camera(),
            gain: self.world.resource::<Shading>().fade.gain(),
            overlay_opacity: self.world.resource::<ArrivalOverlay>().overlay.opacity(),
            pilot: self.world.resource::<PilotState>().last_update,
        }
    }
}
