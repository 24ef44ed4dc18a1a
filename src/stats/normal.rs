//! Standard normal CDF via Abramowitz & Stegun 7.1.26
//!
//! Golden values depend on these exact coefficients. Do not swap in a
//! library erf.

use crate::types::clinical_thresholds::{
    AS_A1, AS_A2, AS_A3, AS_A4, AS_A5, AS_P, PERCENTILE_CEILING, PERCENTILE_FLOOR,
};

/// Phi(z), accurate to about 1.5e-7.
pub fn standard_normal_cdf(z: f64) -> f64 {
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;

    let t = 1.0 / (1.0 + AS_P * x);
    let poly = ((((AS_A5 * t + AS_A4) * t + AS_A3) * t + AS_A2) * t + AS_A1) * t;
    let y = 1.0 - poly * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// Percentile (0-100) for `z`, clamped to [0.1, 99.9].
///
/// A NaN `z` lands on the floor.
pub fn percentile_from_z(z: f64) -> f64 {
    (standard_normal_cdf(z) * 100.0)
        .max(PERCENTILE_FLOOR)
        .min(PERCENTILE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_fiftieth() {
        // a1..a5 sum to 0.999999999, so the approximation lands at 50.00000005
        let p = percentile_from_z(0.0);
        assert!((p - 50.0).abs() < 1e-6);
        assert!((p - 50.000_000_05).abs() < 1e-9);
    }

    #[test]
    fn test_one_sd() {
        assert!((percentile_from_z(1.0) - 84.13).abs() < 0.01);
        assert!((percentile_from_z(-1.0) - 15.87).abs() < 0.01);
    }

    #[test]
    fn test_symmetry() {
        for z in [0.25, 0.5, 1.282, 1.645, 2.0, 2.5] {
            let sum = standard_normal_cdf(z) + standard_normal_cdf(-z);
            assert!((sum - 1.0).abs() < 1e-12, "z={z}");
        }
    }

    #[test]
    fn test_clamped_at_extremes() {
        assert_eq!(percentile_from_z(1000.0), 99.9);
        assert_eq!(percentile_from_z(-1000.0), 0.1);
        assert_eq!(percentile_from_z(f64::INFINITY), 99.9);
        assert_eq!(percentile_from_z(f64::NEG_INFINITY), 0.1);
        // 3.5 SD is already past 99.9
        assert_eq!(percentile_from_z(3.5), 99.9);
    }

    #[test]
    fn test_bp_quantiles() {
        assert!((percentile_from_z(1.282) - 90.0).abs() < 0.01);
        assert!((percentile_from_z(1.645) - 95.0).abs() < 0.01);
    }
}
