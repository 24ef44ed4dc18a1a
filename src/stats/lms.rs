//! LMS (Box-Cox) transform used by the WHO/CDC growth standards

use thiserror::Error;

use crate::reference::Lms;
use crate::types::clinical_thresholds::LMS_L_EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LmsError {
    #[error("Measurement must be positive and finite, got {0}")]
    NonPositiveValue(f64),

    #[error("LMS median (M) must be positive and finite, got {0}")]
    NonPositiveMedian(f64),

    #[error("LMS coefficient of variation (S) must be positive and finite, got {0}")]
    NonPositiveSpread(f64),

    #[error("LMS power (L) must be finite, got {0}")]
    NonFinitePower(f64),
}

/// Z-score of `value` under the LMS distribution.
///
/// `|L| < 0.001` uses the log limit `ln(value / M) / S`; otherwise
/// `((value / M)^L - 1) / (L * S)`.
pub fn z_score(value: f64, lms: &Lms) -> Result<f64, LmsError> {
    let Lms { l, m, s } = *lms;
    if !(value.is_finite() && value > 0.0) {
        return Err(LmsError::NonPositiveValue(value));
    }
    if !(m.is_finite() && m > 0.0) {
        return Err(LmsError::NonPositiveMedian(m));
    }
    if !(s.is_finite() && s > 0.0) {
        return Err(LmsError::NonPositiveSpread(s));
    }
    if !l.is_finite() {
        return Err(LmsError::NonFinitePower(l));
    }

    let ratio = value / m;
    if l.abs() < LMS_L_EPSILON {
        Ok(ratio.ln() / s)
    } else {
        Ok((ratio.powf(l) - 1.0) / (l * s))
    }
}
