//! Engine Regression Tests
//!
//! Golden values for the three scoring engines. These pin the exact
//! behaviour of the A&S approximation, the LMS epsilon and the inclusive
//! threshold comparisons; any drift here changes what clinicians see.

use pedstat::engine::{
    bilirubin_classification, bp_classification, growth_percentile, risk_category,
};
use pedstat::reference::Lms;
use pedstat::stats::{percentile_from_z, standard_normal_cdf, z_score};
use pedstat::types::{
    BilirubinInterpretation, BilirubinRiskCategory, BpClassification, GestationalAge,
    GrowthMeasurement, HeightPercentile, Sex,
};

// ============================================================================
// Growth
// ============================================================================

#[test]
fn male_birth_weight_at_median_is_fiftieth_percentile() {
    let r = growth_percentile(Sex::Male, GrowthMeasurement::WeightForAge, 0.0, 3.3464).unwrap();
    assert!(r.z_score.abs() < 1e-9, "z = {}", r.z_score);
    assert!((r.percentile - 50.0).abs() < 1e-6, "p = {}", r.percentile);
    assert_eq!(r.lms, Lms::new(0.3487, 3.3464, 0.14602));
}

#[test]
fn every_table_median_scores_zero() {
    for sex in Sex::ALL {
        for m in GrowthMeasurement::ALL {
            for age in [0.0, 1.0, 6.0, 12.0, 18.0, 24.0] {
                let median = pedstat::stats::interpolate(
                    &pedstat::reference::who_growth::table(sex, m),
                    age,
                )
                .unwrap()
                .m;
                let r = growth_percentile(sex, m, age, median).unwrap();
                assert!(r.z_score.abs() < 1e-12, "{sex} {m} {age}: z = {}", r.z_score);
            }
        }
    }
}

#[test]
fn heavier_baby_scores_higher() {
    let light =
        growth_percentile(Sex::Female, GrowthMeasurement::WeightForAge, 6.0, 6.5).unwrap();
    let heavy =
        growth_percentile(Sex::Female, GrowthMeasurement::WeightForAge, 6.0, 8.5).unwrap();
    assert!(light.percentile < 50.0);
    assert!(heavy.percentile > 50.0);
    assert!(heavy.z_score > light.z_score);
}

#[test]
fn thirty_months_scores_like_twenty_four() {
    let at_24 =
        growth_percentile(Sex::Male, GrowthMeasurement::LengthForAge, 24.0, 90.0).unwrap();
    let at_30 =
        growth_percentile(Sex::Male, GrowthMeasurement::LengthForAge, 30.0, 90.0).unwrap();
    assert_eq!(at_24.percentile, at_30.percentile);
    assert!(!at_24.age_clamped);
    assert!(at_30.age_clamped);
}

#[test]
fn zero_value_returns_no_result() {
    assert!(growth_percentile(Sex::Male, GrowthMeasurement::WeightForAge, 3.0, 0.0).is_err());
    assert!(growth_percentile(Sex::Female, GrowthMeasurement::LengthForAge, 3.0, -50.0).is_err());
}

// ============================================================================
// Normal CDF
// ============================================================================

#[test]
fn one_sd_is_84_13() {
    assert!((percentile_from_z(1.0) - 84.13).abs() < 0.005);
}

#[test]
fn extreme_z_is_clamped() {
    assert_eq!(percentile_from_z(1000.0), 99.9);
    assert_eq!(percentile_from_z(-1000.0), 0.1);
}

#[test]
fn approximation_matches_exact_cdf() {
    use statrs::distribution::{ContinuousCDF, Normal};
    let exact = Normal::new(0.0, 1.0).unwrap();
    let mut z = -6.0;
    while z <= 6.0 {
        let diff = (standard_normal_cdf(z) - exact.cdf(z)).abs();
        assert!(diff < 1e-6, "z = {z}: A&S differs from exact by {diff}");
        z += 0.05;
    }
}

#[test]
fn lms_log_branch_below_epsilon() {
    let near_zero = Lms::new(0.000_9, 10.0, 0.1);
    let z = z_score(12.0, &near_zero).unwrap();
    assert!((z - (1.2f64).ln() / 0.1).abs() < 1e-12);
}

// ============================================================================
// Blood pressure
// ============================================================================

#[test]
fn ten_year_old_boy_systolic_at_p95_is_stage1() {
    let r = bp_classification(114.16, 60.0, 10, Sex::Male, HeightPercentile::P50).unwrap();
    assert!(r.classification >= BpClassification::Stage1Hypertension);
    assert_eq!(r.reference.sys_mean, 101.0);
    assert_eq!(r.reference.sys_sd, 8.0);
}

#[test]
fn ten_year_old_boy_systolic_below_p95_is_at_most_elevated() {
    let r = bp_classification(113.9, 60.0, 10, Sex::Male, HeightPercentile::P50).unwrap();
    assert!(r.classification <= BpClassification::Elevated);
    assert_eq!(r.classification, BpClassification::Elevated);
}

#[test]
fn stage2_needs_twelve_mmhg_above_p95() {
    let below = bp_classification(126.0, 60.0, 10, Sex::Male, HeightPercentile::P50).unwrap();
    assert_eq!(below.classification, BpClassification::Stage1Hypertension);
    let at = bp_classification(126.16, 60.0, 10, Sex::Male, HeightPercentile::P50).unwrap();
    assert_eq!(at.classification, BpClassification::Stage2Hypertension);
}

#[test]
fn diastolic_alone_can_stage() {
    // dia p95 = 61 + 1.645 * 5 = 69.225
    let r = bp_classification(95.0, 70.0, 10, Sex::Male, HeightPercentile::P50).unwrap();
    assert_eq!(r.classification, BpClassification::Stage1Hypertension);
    assert!(r.systolic_percentile < 50.0);
}

#[test]
fn bp_out_of_range_ages_return_no_result() {
    assert!(bp_classification(100.0, 60.0, 0, Sex::Male, HeightPercentile::P50).is_err());
    assert!(bp_classification(100.0, 60.0, 18, Sex::Female, HeightPercentile::P50).is_err());
}

#[test]
fn bp_non_positive_pressure_returns_no_result() {
    assert!(bp_classification(0.0, 60.0, 10, Sex::Male, HeightPercentile::P50).is_err());
    assert!(bp_classification(100.0, 0.0, 10, Sex::Male, HeightPercentile::P50).is_err());
}

// ============================================================================
// Bilirubin
// ============================================================================

#[test]
fn low_risk_phototherapy_at_24h_is_inclusive() {
    let at = bilirubin_classification(11.0, 24.0, GestationalAge::Term, false).unwrap();
    assert_eq!(at.phototherapy_threshold, 11.0);
    assert!(at.exceeds_phototherapy);
    assert_eq!(at.interpretation, BilirubinInterpretation::ExceedsPhototherapy);

    let below = bilirubin_classification(10.9, 24.0, GestationalAge::Term, false).unwrap();
    assert!(!below.exceeds_phototherapy);
}

#[test]
fn low_risk_phototherapy_at_30h_is_midpoint() {
    let r = bilirubin_classification(1.0, 30.0, GestationalAge::Term, false).unwrap();
    assert!((r.phototherapy_threshold - 12.25).abs() < 1e-12);
}

#[test]
fn exchange_threshold_is_inclusive() {
    // medium-risk exchange at 48h = 18.0
    let r = bilirubin_classification(18.0, 48.0, GestationalAge::LatePreterm, false).unwrap();
    assert_eq!(r.risk_category, BilirubinRiskCategory::MediumRisk);
    assert_eq!(r.exchange_threshold, 18.0);
    assert!(r.exceeds_exchange);
    assert_eq!(r.interpretation, BilirubinInterpretation::ExceedsExchange);
}

#[test]
fn negative_hours_return_no_result() {
    assert!(bilirubin_classification(8.0, -1.0, GestationalAge::Term, false).is_err());
}

#[test]
fn risk_category_table_is_exhaustive() {
    assert_eq!(
        risk_category(GestationalAge::Term, false),
        BilirubinRiskCategory::LowRisk
    );
    assert_eq!(
        risk_category(GestationalAge::Term, true),
        BilirubinRiskCategory::MediumRisk
    );
    assert_eq!(
        risk_category(GestationalAge::LatePreterm, false),
        BilirubinRiskCategory::MediumRisk
    );
    assert_eq!(
        risk_category(GestationalAge::LatePreterm, true),
        BilirubinRiskCategory::HighRisk
    );
}

#[test]
fn results_serialise_for_the_ui() {
    let r = bilirubin_classification(16.0, 60.0, GestationalAge::Term, true).unwrap();
    let json = serde_json::to_value(r).unwrap();
    assert_eq!(json["risk_category"], "medium_risk");
    assert_eq!(json["interpretation"], "exceeds_phototherapy");
    assert_eq!(json["phototherapy_threshold"], 14.5);
}
