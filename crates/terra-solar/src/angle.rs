//! Floor-style angle reduction that stays correct for negative inputs.

use std::f64::consts::TAU;

/// Reduce an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` alone can return exactly `2π` for tiny negative inputs
/// (`-1e-17 + 2π` rounds up), so that case is folded back to zero.
pub fn normalize_radians(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    if reduced >= TAU { 0.0 } else { reduced }
}

/// Reduce an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(360.0);
    if reduced >= 360.0 { 0.0 } else { reduced }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distance between two angles measured around the circle.
    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(TAU - d)
    }

    /// Deterministic spread of inputs: large, small, negative, near multiples of 2π.
    fn sample_angles() -> Vec<f64> {
        let mut angles = vec![
            0.0,
            -0.0,
            TAU,
            -TAU,
            1e-17,
            -1e-17,
            -1e-300,
            TAU - 1e-15,
            -TAU + 1e-15,
            1e6,
            -1e6,
            123_456.789,
        ];
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        for _ in 0..500 {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            angles.push((unit - 0.5) * 2000.0);
        }
        angles
    }

    #[test]
    fn test_normalize_radians_in_range() {
        for a in sample_angles() {
            let n = normalize_radians(a);
            assert!((0.0..TAU).contains(&n), "normalize({a}) = {n} out of [0, 2π)");
        }
    }

    #[test]
    fn test_normalize_radians_is_periodic() {
        for a in sample_angles() {
            for k in [-3_i32, -1, 1, 2, 7] {
                let shifted = a + TAU * f64::from(k);
                let d = circular_distance(normalize_radians(a), normalize_radians(shifted));
                assert!(d < 1e-9, "normalize({a}) vs normalize({a} + 2π·{k}) differ by {d}");
            }
        }
    }

    #[test]
    fn test_negative_angle_wraps_forward() {
        let n = normalize_radians(-std::f64::consts::FRAC_PI_2);
        assert!((n - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_negative_does_not_return_tau() {
        assert_eq!(normalize_radians(-1e-17), 0.0);
        assert_eq!(normalize_degrees(-1e-15), 0.0);
    }

    #[test]
    fn test_normalize_degrees_in_range() {
        for a in sample_angles() {
            let deg = a.to_degrees();
            let n = normalize_degrees(deg);
            assert!((0.0..360.0).contains(&n), "normalize_degrees({deg}) = {n}");
        }
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-12);
    }
}
