//! WHO growth percentile engine

use tracing::debug;

use super::{require_number, require_positive, EngineError};
use crate::reference::who_growth;
use crate::stats::{interpolate::locate, percentile_from_z, z_score};
use crate::types::{GrowthMeasurement, GrowthResult, Sex};

/// Z-score and percentile of `value` for a child of `age_months`.
///
/// Ages outside 0-24 months are clamped to the nearest table edge and the
/// result is still returned with `age_clamped` set; infinite ages clamp the
/// same way. Non-positive or non-finite values, and a NaN age, yield no result.
pub fn growth_percentile(
    sex: Sex,
    measurement: GrowthMeasurement,
    age_months: f64,
    value: f64,
) -> Result<GrowthResult, EngineError> {
    let age_months = require_number("age_months", age_months)
        .inspect_err(|e| debug!(error = %e, "Rejected growth query"))?;
    let value = require_positive("value", value).inspect_err(|e| {
        debug!(%sex, %measurement, value, error = %e, "Rejected growth query");
    })?;

    let table = who_growth::table(sex, measurement);
    let found = locate(&table, age_months)?;
    if found.clamped {
        debug!(
            table = %table.key(),
            age_months,
            "Age outside table coverage, clamped to nearest edge"
        );
    }

    let lms = found.params;
    let z = z_score(value, &lms)?;

    Ok(GrowthResult {
        sex,
        measurement,
        age_months,
        value,
        lms,
        z_score: z,
        percentile: percentile_from_z(z),
        age_clamped: found.clamped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_at_birth_is_fiftieth() {
        let r = growth_percentile(Sex::Male, GrowthMeasurement::WeightForAge, 0.0, 3.3464).unwrap();
        assert!(r.z_score.abs() < 1e-9);
        assert!((r.percentile - 50.0).abs() < 1e-6);
        assert!(!r.age_clamped);
    }

    #[test]
    fn test_length_plus_one_sd() {
        // L = 1 at 12 months: value = M * (1 + S) is exactly Z = 1
        let v = 75.7488 * (1.0 + 0.03138);
        let r = growth_percentile(Sex::Male, GrowthMeasurement::LengthForAge, 12.0, v).unwrap();
        assert!((r.z_score - 1.0).abs() < 1e-9);
        assert!((r.percentile - 84.13).abs() < 0.01);
    }

    #[test]
    fn test_old_age_clamps_to_24_months() {
        let at_24 =
            growth_percentile(Sex::Female, GrowthMeasurement::WeightForAge, 24.0, 11.0).unwrap();
        let at_30 =
            growth_percentile(Sex::Female, GrowthMeasurement::WeightForAge, 30.0, 11.0).unwrap();
        assert_eq!(at_24.z_score, at_30.z_score);
        assert!(at_30.age_clamped);
        assert_eq!(at_30.age_months, 30.0);
    }

    #[test]
    fn test_negative_age_clamps_to_birth() {
        let r = growth_percentile(Sex::Male, GrowthMeasurement::WeightForAge, -1.0, 3.3464).unwrap();
        assert!(r.age_clamped);
        assert!(r.z_score.abs() < 1e-9);
    }

    #[test]
    fn test_infinite_age_clamps_to_table_edges() {
        let late = growth_percentile(Sex::Male, GrowthMeasurement::LengthForAge, f64::INFINITY, 87.0)
            .unwrap();
        let at_24 =
            growth_percentile(Sex::Male, GrowthMeasurement::LengthForAge, 24.0, 87.0).unwrap();
        assert!(late.age_clamped);
        assert_eq!(late.z_score, at_24.z_score);

        let early =
            growth_percentile(Sex::Male, GrowthMeasurement::WeightForAge, f64::NEG_INFINITY, 3.3464)
                .unwrap();
        assert!(early.age_clamped);
        assert!(early.z_score.abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_value() {
        for v in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err =
                growth_percentile(Sex::Male, GrowthMeasurement::WeightForAge, 6.0, v).unwrap_err();
            assert!(err.is_invalid_input(), "value {v} should be rejected");
        }
    }

    #[test]
    fn test_rejects_nan_age() {
        let err = growth_percentile(Sex::Male, GrowthMeasurement::LengthForAge, f64::NAN, 60.0)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
