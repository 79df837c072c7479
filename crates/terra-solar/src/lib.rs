//! Low-precision solar ephemeris: where the sun is, seen from a point fixed
//! on the rotating Earth.
//!
//! All intermediate arithmetic is done in degrees and converted to radians at
//! the end. Results are accurate to roughly a hundredth of a degree, which is
//! far below what a rendered terminator can show.

mod angle;
mod ephemeris;
mod julian;

pub use angle::{normalize_degrees, normalize_radians};
pub use ephemeris::{SolarPosition, compute_sun_direction, solar_position, subsolar_point};
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, UNIX_EPOCH_JD, days_since_j2000, julian_centuries,
    julian_date,
};
