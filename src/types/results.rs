//! Engine result records and the ordered clinical categories they carry

use serde::{Deserialize, Serialize};

use super::{BilirubinRiskCategory, GrowthMeasurement, Sex};
use crate::reference::{BpParams, Lms};

// ============================================================================
// Growth
// ============================================================================

/// Output of the growth percentile engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub sex: Sex,
    pub measurement: GrowthMeasurement,
    /// Age as supplied by the caller (months)
    pub age_months: f64,
    /// Measured value in `measurement.unit()`
    pub value: f64,
    /// L, M, S interpolated at `age_months`
    pub lms: Lms,
    pub z_score: f64,
    /// Percentile in [0.1, 99.9]
    pub percentile: f64,
    /// True when the age fell outside the table and was clamped to its edge
    pub age_clamped: bool,
}

// ============================================================================
// Blood Pressure
// ============================================================================

/// AAP 2017 blood-pressure category, ordered by severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BpClassification {
    Normal = 0,
    Elevated = 1,
    Stage1Hypertension = 2,
    Stage2Hypertension = 3,
}

impl std::fmt::Display for BpClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BpClassification::Normal => write!(f, "NORMAL"),
            BpClassification::Elevated => write!(f, "ELEVATED"),
            BpClassification::Stage1Hypertension => write!(f, "STAGE 1 HTN"),
            BpClassification::Stage2Hypertension => write!(f, "STAGE 2 HTN"),
        }
    }
}

/// Cut-points derived from one mean/SD pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutPoints {
    /// mean + 1.282 SD
    pub p90: f64,
    /// mean + 1.645 SD
    pub p95: f64,
    /// p95 + 12 mmHg
    pub stage2: f64,
}

/// Output of the blood-pressure engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BpResult {
    pub systolic_percentile: f64,
    pub diastolic_percentile: f64,
    pub systolic_z: f64,
    pub diastolic_z: f64,
    pub classification: BpClassification,
    /// Normative row used for scoring
    pub reference: BpParams,
    pub systolic_cut_points: CutPoints,
    pub diastolic_cut_points: CutPoints,
}

// ============================================================================
// Bilirubin
// ============================================================================

/// Interpretation of a bilirubin value against both nomogram curves.
///
/// Exchange overrides phototherapy, which overrides below-threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BilirubinInterpretation {
    BelowThreshold = 0,
    ExceedsPhototherapy = 1,
    ExceedsExchange = 2,
}

impl std::fmt::Display for BilirubinInterpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BilirubinInterpretation::BelowThreshold => write!(f, "Below treatment threshold"),
            BilirubinInterpretation::ExceedsPhototherapy => {
                write!(f, "Exceeds phototherapy threshold")
            }
            BilirubinInterpretation::ExceedsExchange => {
                write!(f, "Exceeds exchange transfusion threshold")
            }
        }
    }
}

/// Output of the bilirubin nomogram engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BilirubinResult {
    /// mg/dL
    pub phototherapy_threshold: f64,
    /// mg/dL
    pub exchange_threshold: f64,
    pub exceeds_phototherapy: bool,
    pub exceeds_exchange: bool,
    pub risk_category: BilirubinRiskCategory,
    pub interpretation: BilirubinInterpretation,
    /// True when the postnatal age was past the last nomogram hour
    pub hours_clamped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bp_classification_ordering() {
        assert!(BpClassification::Normal < BpClassification::Elevated);
        assert!(BpClassification::Elevated < BpClassification::Stage1Hypertension);
        assert!(BpClassification::Stage1Hypertension < BpClassification::Stage2Hypertension);
    }

    #[test]
    fn test_interpretation_serializes_snake_case() {
        let json = serde_json::to_string(&BilirubinInterpretation::ExceedsPhototherapy).unwrap();
        assert_eq!(json, "\"exceeds_phototherapy\"");
    }
}
