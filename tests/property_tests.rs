//! Property-based tests for the statistical primitives and engines

use pedstat::engine::{bilirubin_classification, bp_classification, growth_percentile};
use pedstat::reference::{aap_bilirubin, who_growth, Lms};
use pedstat::stats::{interpolate, percentile_from_z, z_score};
use pedstat::types::{
    BilirubinRiskCategory, GestationalAge, GrowthMeasurement, HeightPercentile, NomogramCurve,
    Sex,
};
use proptest::prelude::*;

fn any_sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn any_measurement() -> impl Strategy<Value = GrowthMeasurement> {
    prop_oneof![
        Just(GrowthMeasurement::WeightForAge),
        Just(GrowthMeasurement::LengthForAge)
    ]
}

fn any_ga() -> impl Strategy<Value = GestationalAge> {
    prop_oneof![Just(GestationalAge::Term), Just(GestationalAge::LatePreterm)]
}

proptest! {
    /// Percentile output never leaves [0.1, 99.9]
    #[test]
    fn percentile_is_always_bounded(z in -1.0e6..1.0e6f64) {
        let p = percentile_from_z(z);
        prop_assert!((0.1..=99.9).contains(&p), "z={} gave {}", z, p);
    }

    /// Phi is non-decreasing in z
    #[test]
    fn percentile_is_monotone_in_z(a in -8.0..8.0f64, b in -8.0..8.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(percentile_from_z(lo) <= percentile_from_z(hi));
    }

    /// The median always maps to Z = 0
    #[test]
    fn median_maps_to_zero(l in -2.0..2.0f64, m in 0.1..200.0f64, s in 0.01..0.5f64) {
        let z = z_score(m, &Lms::new(l, m, s)).unwrap();
        prop_assert!(z.abs() < 1e-9, "L={} M={} S={} gave z={}", l, m, s, z);
    }

    /// Larger measurements give strictly larger Z for fixed LMS
    #[test]
    fn z_is_strictly_increasing_in_value(
        l in -1.0..1.5f64,
        m in 1.0..100.0f64,
        s in 0.02..0.3f64,
        v1 in 0.5..1.5f64,
        step in 0.01..0.5f64,
    ) {
        let lms = Lms::new(l, m, s);
        let a = m * v1;
        let b = a + m * step;
        prop_assert!(z_score(a, &lms).unwrap() < z_score(b, &lms).unwrap());
    }

    /// Growth percentile is non-decreasing in the measured value
    #[test]
    fn growth_percentile_monotone(
        sex in any_sex(),
        measurement in any_measurement(),
        age in 0.0..24.0f64,
        v1 in 1.0..100.0f64,
        v2 in 1.0..100.0f64,
    ) {
        let (lo, hi) = if v1 <= v2 { (v1, v2) } else { (v2, v1) };
        let a = growth_percentile(sex, measurement, age, lo).unwrap();
        let b = growth_percentile(sex, measurement, age, hi).unwrap();
        prop_assert!(a.percentile <= b.percentile);
        prop_assert!(a.z_score <= b.z_score);
    }

    /// Interpolated LMS stays between its bracketing breakpoints
    #[test]
    fn interpolated_median_is_bracketed(
        sex in any_sex(),
        measurement in any_measurement(),
        age in 0.0..24.0f64,
    ) {
        let table = who_growth::table(sex, measurement);
        let m = interpolate(&table, age).unwrap().m;
        let idx = table.points().partition_point(|bp| bp.x <= age).max(1).min(table.len() - 1);
        let lo = table.points()[idx - 1].params.m;
        let hi = table.points()[idx].params.m;
        prop_assert!(m >= lo.min(hi) - 1e-12 && m <= lo.max(hi) + 1e-12);
    }

    /// Nomogram thresholds are non-decreasing in postnatal age
    #[test]
    fn nomogram_threshold_monotone_in_hours(h1 in 0.0..150.0f64, h2 in 0.0..150.0f64) {
        let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
        for risk in BilirubinRiskCategory::ALL {
            for c in NomogramCurve::ALL {
                let curve = aap_bilirubin::curve(risk, c);
                prop_assert!(interpolate(&curve, lo).unwrap() <= interpolate(&curve, hi).unwrap());
            }
        }
    }

    /// The flags always agree with the thresholds they report
    #[test]
    fn bilirubin_flags_match_thresholds(
        tsb in 0.0..30.0f64,
        hours in 0.0..200.0f64,
        ga in any_ga(),
        risk in any::<bool>(),
    ) {
        let r = bilirubin_classification(tsb, hours, ga, risk).unwrap();
        prop_assert_eq!(r.exceeds_phototherapy, tsb >= r.phototherapy_threshold);
        prop_assert_eq!(r.exceeds_exchange, tsb >= r.exchange_threshold);
        prop_assert!(r.exchange_threshold > r.phototherapy_threshold);
    }

    /// Raising either pressure never lowers the stage
    #[test]
    fn bp_stage_monotone(
        age in 1..=17i32,
        sys in 70.0..160.0f64,
        dia in 30.0..110.0f64,
        bump in 0.0..20.0f64,
    ) {
        let base = bp_classification(sys, dia, age, Sex::Female, HeightPercentile::P50).unwrap();
        let up = bp_classification(sys + bump, dia, age, Sex::Female, HeightPercentile::P50).unwrap();
        prop_assert!(up.classification >= base.classification);
        prop_assert!((0.1..=99.9).contains(&base.systolic_percentile));
        prop_assert!((0.1..=99.9).contains(&base.diastolic_percentile));
    }
}
