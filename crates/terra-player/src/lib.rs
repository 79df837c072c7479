//! Camera pose, the orbit-control seam, and the camera pilot that flies the
//! view to a point on the globe.

pub mod camera_pilot;
mod controls;
mod pose;

pub use camera_pilot::{
    Arrival, ArrivalCallback, CameraPilot, Flight, FlightState, PilotSettings, PilotUpdate,
    flight_duration, smoothstep,
};
pub use controls::{NoControls, OrbitControls};
pub use pose::{CameraPose, look_rotation};
