//! Planet-level state: orientation synchronized to the real sun, simulated
//! clock, cloud shell spin, startup fade, and the day/night surface blend.

mod clock;
mod clouds;
pub mod day_night;
mod fade;
mod orientation;

pub use clock::SimClock;
pub use clouds::CloudSpin;
pub use day_night::{
    DAY_NIGHT_SHADER_SOURCE, DayNightUniform, NIGHT_STRENGTH, SurfaceSamples, TERMINATOR_BAND,
    blend_day_night, day_amount,
};
pub use fade::{StartupFade, ease_out_cubic};
pub use orientation::{
    OrientationSettings, OrientationSynchronizer, PlanetPose, orientation_for,
};
