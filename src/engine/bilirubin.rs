//! AAP 2022 bilirubin nomogram engine (infants >= 35 weeks)

use tracing::debug;

use super::{interpret_bilirubin, require_non_negative, EngineError};
use crate::reference::aap_bilirubin;
use crate::stats::interpolate::locate;
use crate::types::{BilirubinResult, BilirubinRiskCategory, GestationalAge, NomogramCurve};

/// Neurotoxicity risk category from gestational age and risk factors.
pub fn risk_category(ga: GestationalAge, has_risk_factors: bool) -> BilirubinRiskCategory {
    match (ga, has_risk_factors) {
        (GestationalAge::Term, false) => BilirubinRiskCategory::LowRisk,
        (GestationalAge::Term, true) | (GestationalAge::LatePreterm, false) => {
            BilirubinRiskCategory::MediumRisk
        }
        (GestationalAge::LatePreterm, true) => BilirubinRiskCategory::HighRisk,
    }
}

/// Compare total serum bilirubin (mg/dL) against both treatment curves.
///
/// Both comparisons are inclusive. Hours past 120, including `+inf`, use the
/// 120 h thresholds. Negative or NaN inputs yield no result.
pub fn bilirubin_classification(
    bilirubin: f64,
    postnatal_age_hours: f64,
    ga: GestationalAge,
    has_risk_factors: bool,
) -> Result<BilirubinResult, EngineError> {
    let bilirubin = require_non_negative("bilirubin", bilirubin)
        .inspect_err(|e| debug!(error = %e, "Rejected bilirubin query"))?;
    let hours = require_non_negative("postnatal_age_hours", postnatal_age_hours)
        .inspect_err(|e| debug!(error = %e, "Rejected bilirubin query"))?;

    let risk = risk_category(ga, has_risk_factors);
    let photo = locate(&aap_bilirubin::curve(risk, NomogramCurve::Phototherapy), hours)?;
    let exchange = locate(
        &aap_bilirubin::curve(risk, NomogramCurve::ExchangeTransfusion),
        hours,
    )?;
    let hours_clamped = photo.clamped || exchange.clamped;
    if hours_clamped {
        debug!(hours, "Postnatal age past nomogram coverage, using last hour");
    }

    let exceeds_phototherapy = bilirubin >= photo.params;
    let exceeds_exchange = bilirubin >= exchange.params;
    let interpretation = interpret_bilirubin(exceeds_phototherapy, exceeds_exchange);
    debug!(%risk, hours, bilirubin, %interpretation, "Bilirubin classified");

    Ok(BilirubinResult {
        phototherapy_threshold: photo.params,
        exchange_threshold: exchange.params,
        exceeds_phototherapy,
        exceeds_exchange,
        risk_category: risk,
        interpretation,
        hours_clamped,
    })
}
