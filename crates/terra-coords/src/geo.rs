//! Latitude/longitude ↔ Cartesian conversion.

use glam::DVec3;

/// Convert geographic degrees to a point on a sphere of the given radius.
///
/// The mathematical azimuth is negated so that east-positive longitudes
/// appear eastward on a globe viewed from outside with +Y up.
pub fn lat_lon_to_vec3(lat_deg: f64, lon_deg: f64, radius: f64) -> DVec3 {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = (-lon_deg).to_radians().sin_cos();
    DVec3::new(
        radius * cos_lat * cos_lon,
        radius * sin_lat,
        radius * cos_lat * sin_lon,
    )
}

/// Recover geographic degrees from a position in the Earth-fixed frame.
///
/// Longitude is in `(-180, 180]`. The origin maps to `(0, 0)`.
pub fn vec3_to_lat_lon(position: DVec3) -> (f64, f64) {
    let len = position.length();
    if len == 0.0 {
        return (0.0, 0.0);
    }
    let lat = (position.y / len).clamp(-1.0, 1.0).asin().to_degrees();
    let lon = (-position.z).atan2(position.x).to_degrees();
    (lat, lon)
}

/// An immutable point on the globe, kept together with the coordinates it
/// was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    lat_deg: f64,
    lon_deg: f64,
    radius: f64,
    position: DVec3,
}

impl SurfacePoint {
    /// Build a surface point from geographic degrees on a sphere of `radius`.
    pub fn new(lat_deg: f64, lon_deg: f64, radius: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            radius,
            position: lat_lon_to_vec3(lat_deg, lon_deg, radius),
        }
    }

    /// Latitude in degrees.
    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    /// Longitude in degrees, east positive.
    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }

    /// Radius of the sphere the point sits on.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Position in the Earth-fixed frame.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Outward unit normal at the point.
    pub fn normal(&self) -> DVec3 {
        self.position.normalize_or_zero()
    }
}
