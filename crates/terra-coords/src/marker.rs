//! The location marker shown on the globe.

use tracing::info;

use crate::geo::SurfacePoint;

/// A marker sitting slightly above the globe surface.
///
/// Starts at a default location and is replaced wholesale, never nudged,
/// when a geolocation resolves.
#[derive(Clone, Debug)]
pub struct Marker {
    point: SurfacePoint,
    radius: f64,
    relocated: bool,
}

impl Marker {
    /// Place the marker at its default location on a sphere of `radius`.
    pub fn default_location(lat_deg: f64, lon_deg: f64, radius: f64) -> Self {
        Self {
            point: SurfacePoint::new(lat_deg, lon_deg, radius),
            radius,
            relocated: false,
        }
    }

    /// Current surface point.
    pub fn point(&self) -> &SurfacePoint {
        &self.point
    }

    /// `true` once a geolocation has replaced the default location.
    pub fn is_relocated(&self) -> bool {
        self.relocated
    }

    /// Replace the marker with a newly resolved location on the same sphere.
    pub fn relocate(&mut self, lat_deg: f64, lon_deg: f64) {
        self.point = SurfacePoint::new(lat_deg, lon_deg, self.radius);
        self.relocated = true;
        info!(lat = lat_deg, lon = lon_deg, "marker relocated");
    }
}
