//! AAP 2017 blood-pressure engine
//!
//! Percentiles come from the normal approximation over the row's mean/SD.
//! Stages come from cut-points at mean + 1.282 SD (p90), mean + 1.645 SD
//! (p95), and a fixed p95 + 12 mmHg for stage 2.

use tracing::debug;

use super::{classify_bp, require_positive, EngineError};
use crate::reference::aap_bp;
use crate::stats::percentile_from_z;
use crate::types::clinical_thresholds::{
    BP_MAX_AGE_YEARS, BP_MIN_AGE_YEARS, BP_STAGE2_OFFSET_MMHG, BP_Z_P90, BP_Z_P95,
};
use crate::types::{BpResult, CutPoints, HeightPercentile, Sex};

/// Cut-points for one pressure given its normative mean and SD.
pub fn cut_points(mean: f64, sd: f64) -> CutPoints {
    let p95 = mean + BP_Z_P95 * sd;
    CutPoints {
        p90: mean + BP_Z_P90 * sd,
        p95,
        stage2: p95 + BP_STAGE2_OFFSET_MMHG,
    }
}

/// Score a systolic/diastolic pair for a child of `age_years`.
///
/// The row is selected by exact integer age; ages outside 1-17 and
/// non-positive pressures yield no result.
pub fn bp_classification(
    systolic: f64,
    diastolic: f64,
    age_years: i32,
    sex: Sex,
    height: HeightPercentile,
) -> Result<BpResult, EngineError> {
    if !(BP_MIN_AGE_YEARS..=BP_MAX_AGE_YEARS).contains(&age_years) {
        debug!(age_years, "Rejected BP query: age outside normative tables");
        return Err(EngineError::invalid(
            "age_years",
            format!("must be within {BP_MIN_AGE_YEARS}-{BP_MAX_AGE_YEARS}, got {age_years}"),
        ));
    }
    let systolic = require_positive("systolic", systolic)
        .inspect_err(|e| debug!(error = %e, "Rejected BP query"))?;
    let diastolic = require_positive("diastolic", diastolic)
        .inspect_err(|e| debug!(error = %e, "Rejected BP query"))?;

    let table = aap_bp::table(sex);
    let reference = *table.row(age_years, height).ok_or_else(|| {
        EngineError::invalid("age_years", format!("no {sex} row for age {age_years}"))
    })?;

    let systolic_z = (systolic - reference.sys_mean) / reference.sys_sd;
    let diastolic_z = (diastolic - reference.dia_mean) / reference.dia_sd;
    let systolic_cut_points = cut_points(reference.sys_mean, reference.sys_sd);
    let diastolic_cut_points = cut_points(reference.dia_mean, reference.dia_sd);

    let classification = classify_bp(
        systolic,
        diastolic,
        &systolic_cut_points,
        &diastolic_cut_points,
    );
    debug!(%sex, age_years, %height, %classification, "BP classified");

    Ok(BpResult {
        systolic_percentile: percentile_from_z(systolic_z),
        diastolic_percentile: percentile_from_z(diastolic_z),
        systolic_z,
        diastolic_z,
        classification,
        reference,
        systolic_cut_points,
        diastolic_cut_points,
    })
}
