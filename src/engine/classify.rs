//! Ordered category rules
//!
//! Ranges overlap at their boundaries, so each chain is evaluated top-down
//! and the first match wins. All comparisons are inclusive.

use crate::types::{BilirubinInterpretation, BpClassification, CutPoints};

/// Stage 2, then stage 1, then elevated, then normal.
///
/// Either pressure alone is enough to reach a stage.
pub fn classify_bp(
    systolic: f64,
    diastolic: f64,
    sys: &CutPoints,
    dia: &CutPoints,
) -> BpClassification {
    if systolic >= sys.stage2 || diastolic >= dia.stage2 {
        BpClassification::Stage2Hypertension
    } else if systolic >= sys.p95 || diastolic >= dia.p95 {
        BpClassification::Stage1Hypertension
    } else if systolic >= sys.p90 || diastolic >= dia.p90 {
        BpClassification::Elevated
    } else {
        BpClassification::Normal
    }
}

/// Exchange overrides phototherapy, which overrides below-threshold.
pub fn interpret_bilirubin(
    exceeds_phototherapy: bool,
    exceeds_exchange: bool,
) -> BilirubinInterpretation {
    if exceeds_exchange {
        BilirubinInterpretation::ExceedsExchange
    } else if exceeds_phototherapy {
        BilirubinInterpretation::ExceedsPhototherapy
    } else {
        BilirubinInterpretation::BelowThreshold
    }
}
