//! Camera pilot: flies the camera to a standoff point above a location on the
//! globe.
//!
//! A flight interpolates the camera position from where it was when the
//! flight was requested to a point `standoff` units above the sphere, along
//! the radial through the target. Duration grows with distance and is
//! clamped to `[MIN_FLIGHT_SECONDS, MAX_FLIGHT_SECONDS]`. The camera keeps
//! looking at the raw target throughout. An arrival callback fires once,
//! the first frame the camera comes within `arrival_threshold` of the end.

use std::fmt;

use glam::Vec3;
use terra_config::{GlobeConfig, PilotConfig};
use tracing::{debug, info};

use crate::controls::OrbitControls;
use crate::pose::CameraPose;

/// Shortest flight, seconds.
pub const MIN_FLIGHT_SECONDS: f64 = 1.0;
/// Longest flight, seconds.
pub const MAX_FLIGHT_SECONDS: f64 = 3.0;
const BASE_FLIGHT_SECONDS: f64 = 0.7;
const SECONDS_PER_UNIT: f64 = 0.35;

/// Flight duration in seconds for a camera travelling `distance` scene units.
pub fn flight_duration(distance: f32) -> f64 {
    (BASE_FLIGHT_SECONDS + SECONDS_PER_UNIT * f64::from(distance))
        .clamp(MIN_FLIGHT_SECONDS, MAX_FLIGHT_SECONDS)
}

/// Cubic smoothstep easing, `t²(3 − 2t)` with `t` clamped to `[0, 1]`.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Settings the pilot is constructed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PilotSettings {
    /// Radius of the sphere being flown to.
    pub sphere_radius: f32,
    /// Height above the surface at which the camera parks.
    pub standoff: f32,
    /// Distance to the end point below which arrival fires.
    pub arrival_threshold: f32,
    /// Hand control back to the orbit controls once a flight completes.
    pub reenable_controls: bool,
}

impl Default for PilotSettings {
    fn default() -> Self {
        Self::from_config(&GlobeConfig::default(), &PilotConfig::default())
    }
}

impl PilotSettings {
    /// Build settings from the globe and pilot sections of the config.
    pub fn from_config(globe: &GlobeConfig, pilot: &PilotConfig) -> Self {
        Self {
            sphere_radius: globe.planet_radius as f32,
            standoff: pilot.standoff,
            arrival_threshold: pilot.arrival_threshold,
            reenable_controls: pilot.reenable_controls,
        }
    }

    /// Distance from the sphere center at which flights end.
    pub fn park_distance(&self) -> f32 {
        self.sphere_radius + self.standoff
    }
}

/// Passed to the arrival callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrival {
    /// Camera position when arrival fired.
    pub position: Vec3,
    /// Where the flight ends.
    pub destination: Vec3,
    /// The point the camera looks at.
    pub look_at: Vec3,
}

/// Callback invoked once per flight on arrival.
pub type ArrivalCallback = Box<dyn FnMut(Arrival) + Send + Sync>;

/// One in-progress or finished flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    /// Camera position when the flight was requested.
    pub start: Vec3,
    /// Standoff point above the target.
    pub end: Vec3,
    /// The raw target the camera looks at.
    pub look_at: Vec3,
    /// Monotonic time the flight began, seconds.
    pub started_at: f64,
    /// Flight duration, seconds.
    pub duration: f64,
    /// Whether the arrival callback has fired.
    pub arrival_fired: bool,
}

impl Flight {
    /// Linear progress in `[0, 1]` at monotonic time `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
    }

    /// Camera position at linear progress `t`. Exactly `end` once `t >= 1`.
    pub fn position_at(&self, t: f32) -> Vec3 {
        if t >= 1.0 {
            self.end
        } else {
            self.start.lerp(self.end, smoothstep(t))
        }
    }
}

/// Pilot state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FlightState {
    /// No flight; the camera belongs to the orbit controls.
    #[default]
    Idle,
    /// A flight is in progress.
    Flying(Flight),
    /// The flight reached `t = 1` this frame; parks on the next update.
    Arrived(Flight),
}

/// What happened during one [`CameraPilot::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PilotUpdate {
    /// The arrival callback fired this frame.
    pub arrived: bool,
    /// The flight reached its end this frame.
    pub completed: bool,
}

/// Flies the camera to points on the globe.
pub struct CameraPilot {
    settings: PilotSettings,
    state: FlightState,
    on_arrival: Option<ArrivalCallback>,
}

impl fmt::Debug for CameraPilot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraPilot")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("on_arrival", &self.on_arrival.is_some())
            .finish()
    }
}

impl CameraPilot {
    /// Create an idle pilot.
    pub fn new(settings: PilotSettings) -> Self {
        Self {
            settings,
            state: FlightState::Idle,
            on_arrival: None,
        }
    }

    /// Install the arrival callback, replacing any previous one.
    pub fn set_on_arrival(&mut self, callback: ArrivalCallback) {
        self.on_arrival = Some(callback);
    }

    /// Builder form of [`set_on_arrival`](Self::set_on_arrival).
    pub fn with_on_arrival(mut self, callback: ArrivalCallback) -> Self {
        self.set_on_arrival(callback);
        self
    }

    pub fn settings(&self) -> &PilotSettings {
        &self.settings
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// True while a flight is in progress.
    pub fn is_flying(&self) -> bool {
        matches!(self.state, FlightState::Flying(_))
    }

    /// Start a flight toward `target`, a world-space point on or near the
    /// sphere. Any flight already in progress is replaced; its start becomes
    /// the camera's current position.
    pub fn fly_to<C>(&mut self, target: Vec3, now: f64, camera: &CameraPose, controls: &mut C)
    where
        C: OrbitControls + ?Sized,
    {
        let radial = target.try_normalize().unwrap_or_else(|| {
            camera.position.try_normalize().unwrap_or(Vec3::Z)
        });
        let end = radial * self.settings.park_distance();
        let distance = camera.position.distance(end);
        let duration = flight_duration(distance);

        if self.is_flying() {
            debug!("replacing active flight");
        }
        info!(
            look_at = %target,
            end = %end,
            distance,
            duration,
            "camera flight started"
        );

        self.state = FlightState::Flying(Flight {
            start: camera.position,
            end,
            look_at: target,
            started_at: now,
            duration,
            arrival_fired: false,
        });
        controls.set_enabled(false);
    }

    /// Advance the active flight to monotonic time `now`, writing the new
    /// pose into `camera` and mirroring it into `controls`.
    pub fn update<C>(&mut self, now: f64, camera: &mut CameraPose, controls: &mut C) -> PilotUpdate
    where
        C: OrbitControls + ?Sized,
    {
        let mut flight = match self.state {
            FlightState::Idle => return PilotUpdate::default(),
            FlightState::Arrived(_) => {
                self.state = FlightState::Idle;
                return PilotUpdate::default();
            }
            FlightState::Flying(flight) => flight,
        };

        let t = flight.progress(now);
        camera.position = flight.position_at(t);
        camera.target = flight.look_at;
        controls.sync_pose(camera.position, camera.target);

        let mut update = PilotUpdate::default();

        if !flight.arrival_fired
            && camera.position.distance(flight.end) < self.settings.arrival_threshold
        {
            flight.arrival_fired = true;
            update.arrived = true;
            info!(position = %camera.position, "camera arrived");
            if let Some(callback) = self.on_arrival.as_mut() {
                callback(Arrival {
                    position: camera.position,
                    destination: flight.end,
                    look_at: flight.look_at,
                });
            }
        }

        if t >= 1.0 {
            update.completed = true;
            self.state = FlightState::Arrived(flight);
            if self.settings.reenable_controls {
                controls.set_enabled(true);
            }
            debug!("camera flight completed");
        } else {
            self.state = FlightState::Flying(flight);
        }

        update
    }
}
