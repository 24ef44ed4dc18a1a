//! Scoring Engines
//!
//! Stateless, synchronous entry points over the shared reference registry.
//! Every call either returns a complete result or an `EngineError`; there
//! are no sentinel values and nothing is cached between calls.
//!
//! - `growth_percentile()` - WHO LMS Z-score and percentile
//! - `bp_classification()` - AAP 2017 percentiles and hypertension stage
//! - `bilirubin_classification()` - AAP 2022 nomogram thresholds
//! - `classify_bp()` / `interpret_bilirubin()` - ordered category rules

pub mod bilirubin;
pub mod blood_pressure;
pub mod classify;
pub mod growth;

pub use bilirubin::{bilirubin_classification, risk_category};
pub use blood_pressure::{bp_classification, cut_points};
pub use classify::{classify_bp, interpret_bilirubin};
pub use growth::growth_percentile;

use thiserror::Error;

use crate::reference::TableError;
use crate::stats::LmsError;

/// Why an engine returned no result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Caller supplied a value the engine cannot score
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Reference table error: {0}")]
    Table(#[from] TableError),

    #[error("LMS transform failed: {0}")]
    Lms(#[from] LmsError),
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for caller mistakes, false for table or transform faults
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput { .. })
    }
}

/// Reject NaN/infinite values and anything not strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if !value.is_finite() {
        return Err(EngineError::invalid(field, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(EngineError::invalid(field, format!("must be positive, got {value}")));
    }
    Ok(value)
}

/// Reject NaN. Infinities pass through and clamp at the table edge.
pub(crate) fn require_number(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_nan() {
        return Err(EngineError::invalid(field, "must be a number, got NaN"));
    }
    Ok(value)
}

/// Reject NaN and anything below zero. `+inf` is accepted.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, EngineError> {
    let value = require_number(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("value", 1.5).unwrap(), 1.5);
        assert!(require_positive("value", 0.0).unwrap_err().is_invalid_input());
        assert!(require_positive("value", f64::NAN).is_err());
        assert!(require_positive("value", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("hours", 0.0).unwrap(), 0.0);
        assert!(require_non_negative("hours", -0.01).is_err());
    }

    #[test]
    fn test_require_non_negative_passes_positive_infinity() {
        assert_eq!(require_non_negative("hours", f64::INFINITY).unwrap(), f64::INFINITY);
        assert!(require_non_negative("hours", f64::NEG_INFINITY).is_err());
        assert!(require_non_negative("hours", f64::NAN).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_require_number_only_rejects_nan() {
        assert_eq!(require_number("age_months", f64::NEG_INFINITY).unwrap(), f64::NEG_INFINITY);
        assert_eq!(require_number("age_months", -3.0).unwrap(), -3.0);
        assert_eq!(
            require_number("age_months", f64::NAN).unwrap_err().to_string(),
            "Invalid age_months: must be a number, got NaN"
        );
    }

    #[test]
    fn test_error_message_names_field() {
        let err = require_positive("systolic", -4.0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid systolic: must be positive, got -4");
    }
}
