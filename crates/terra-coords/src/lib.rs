//! Geographic coordinates on the globe and the marker that sits on it.
//!
//! Positions live in the Earth-fixed frame: +Y is the north pole, the prime
//! meridian lies on +X and east longitude increases toward -Z.

mod geo;
mod marker;

pub use geo::{SurfacePoint, lat_lon_to_vec3, vec3_to_lat_lon};
pub use marker::Marker;
