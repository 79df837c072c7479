//! Julian dates and the J2000 time base.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00 TT, treated as UTC here).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional Julian Date of an instant, at millisecond resolution.
pub fn julian_date(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Days elapsed since J2000.0.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    days_since_j2000(jd) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unix_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(julian_date(epoch), UNIX_EPOCH_JD);
    }

    #[test]
    fn test_j2000_epoch() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_date(j2000) - J2000_JD).abs() < 1e-9);
        assert!(julian_centuries(julian_date(j2000)).abs() < 1e-12);
    }

    #[test]
    fn test_millisecond_resolution() {
        let a = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let b = Utc.timestamp_millis_opt(1_700_000_000_001).unwrap();
        let delta_ms = (julian_date(b) - julian_date(a)) * MILLIS_PER_DAY;
        assert!((delta_ms - 1.0).abs() < 0.05, "delta was {delta_ms} ms");
    }

    #[test]
    fn test_century_length() {
        let jd = J2000_JD + DAYS_PER_JULIAN_CENTURY;
        assert!((julian_centuries(jd) - 1.0).abs() < 1e-12);
    }
}
