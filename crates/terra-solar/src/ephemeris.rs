//! Apparent solar position and its direction in the Earth-fixed frame.
//!
//! The Earth-fixed frame has +Y through the north pole and the prime meridian
//! on +X. East longitude runs toward -Z, so a longitude is recovered with
//! `atan2(-z, x)`.

use chrono::{DateTime, Utc};
use glam::DVec3;

use crate::angle::{normalize_degrees, normalize_radians};
use crate::julian::{days_since_j2000, julian_centuries, julian_date};

// Mean elements of the solar orbit, degrees.
const L0_BASE: f64 = 280.466_46;
const L0_RATE: f64 = 36_000.769_83;
const L0_ACCEL: f64 = 0.000_303_2;
const M_BASE: f64 = 357.529_11;
const M_RATE: f64 = 35_999.050_29;
const M_ACCEL: f64 = 0.000_153_7;
const OMEGA_BASE: f64 = 125.04;
const OMEGA_RATE: f64 = 1_934.136;

// Aberration and approximate nutation in longitude, degrees.
const ABERRATION: f64 = 0.005_69;
const NUTATION_LONGITUDE: f64 = 0.004_78;
const NUTATION_OBLIQUITY: f64 = 0.002_56;

// Greenwich Mean Sidereal Time polynomial, degrees.
const GMST_BASE_DEG: f64 = 280.460_618_37;
const GMST_ROTATION_PER_DAY: f64 = 360.985_647_366_29;
const GMST_CORRECTION: f64 = 0.000_387_933;
const GMST_CUBIC_DIVISOR: f64 = 38_710_000.0;

/// Everything the ephemeris derives for one instant. Angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarPosition {
    /// Fractional Julian Date of the instant.
    pub julian_date: f64,
    /// Julian centuries since J2000.0.
    pub centuries: f64,
    /// Apparent ecliptic longitude, `[0, 2π)`.
    pub apparent_longitude: f64,
    /// True obliquity of the ecliptic.
    pub obliquity: f64,
    /// Right ascension, `[0, 2π)`.
    pub right_ascension: f64,
    /// Declination, `[-π/2, π/2]`.
    pub declination: f64,
    /// Greenwich Mean Sidereal Time, `[0, 2π)`.
    pub gmst: f64,
    /// Greenwich hour angle of the sun, `[0, 2π)`.
    pub hour_angle: f64,
}

impl SolarPosition {
    /// Unit vector from the Earth's center toward the sun, Earth-fixed frame.
    pub fn direction(&self) -> DVec3 {
        let (sin_dec, cos_dec) = self.declination.sin_cos();
        let (sin_h, cos_h) = self.hour_angle.sin_cos();
        DVec3::new(cos_dec * cos_h, sin_dec, cos_dec * sin_h).normalize()
    }

    /// Geographic coordinates of the point with the sun at zenith, in degrees.
    ///
    /// Longitude is east-positive in `(-180, 180]`.
    pub fn subsolar_point(&self) -> (f64, f64) {
        let lat = self.declination.to_degrees();
        let mut lon = normalize_degrees(-self.hour_angle.to_degrees());
        if lon > 180.0 {
            lon -= 360.0;
        }
        (lat, lon)
    }
}

/// Compute the full apparent solar position for an instant.
pub fn solar_position(instant: DateTime<Utc>) -> SolarPosition {
    let jd = julian_date(instant);
    let d = days_since_j2000(jd);
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;

    let l0 = normalize_degrees(L0_BASE + L0_RATE * t + L0_ACCEL * t2);
    let m = (M_BASE + M_RATE * t - M_ACCEL * t2).to_radians();
    let omega = normalize_degrees(OMEGA_BASE - OMEGA_RATE * t).to_radians();

    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let true_longitude = l0 + center;
    let apparent_longitude =
        (true_longitude - ABERRATION - NUTATION_LONGITUDE * omega.sin()).to_radians();

    let mean_obliquity =
        23.0 + (26.0 + (21.448 - 46.815 * t - 0.000_59 * t2 + 0.001_813 * t3) / 60.0) / 60.0;
    let obliquity = (mean_obliquity + NUTATION_OBLIQUITY * omega.cos()).to_radians();

    let (sin_lambda, cos_lambda) = apparent_longitude.sin_cos();
    let declination = (obliquity.sin() * sin_lambda).asin();
    let right_ascension = normalize_radians((obliquity.cos() * sin_lambda).atan2(cos_lambda));

    let gmst_deg = GMST_BASE_DEG + GMST_ROTATION_PER_DAY * d + GMST_CORRECTION * t2
        - t3 / GMST_CUBIC_DIVISOR;
    let gmst = normalize_degrees(gmst_deg).to_radians();
    let hour_angle = normalize_radians(gmst - right_ascension);

    SolarPosition {
        julian_date: jd,
        centuries: t,
        apparent_longitude: normalize_radians(apparent_longitude),
        obliquity,
        right_ascension,
        declination,
        gmst,
        hour_angle,
    }
}

/// Direction toward the sun in the Earth-fixed frame at `instant`.
pub fn compute_sun_direction(instant: DateTime<Utc>) -> DVec3 {
    solar_position(instant).direction()
}

/// Latitude/longitude (degrees, east-positive) of the subsolar point at `instant`.
pub fn subsolar_point(instant: DateTime<Utc>) -> (f64, f64) {
    solar_position(instant).subsolar_point()
}
