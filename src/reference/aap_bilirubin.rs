//! AAP 2022 hyperbilirubinemia nomogram (infants >= 35 weeks)
//!
//! Hour-specific total serum bilirubin thresholds (mg/dL) at 12-hour steps
//! from birth to 120 h, one curve per risk category and treatment.

use super::{Breakpoint, ReferenceTable, TableKey};
use crate::types::clinical_thresholds::NOMOGRAM_POINTS;
use crate::types::{BilirubinRiskCategory, NomogramCurve};

type Curve = [Breakpoint<f64>; NOMOGRAM_POINTS];

/// Postnatal hours shared by every curve
pub const HOURS: [f64; NOMOGRAM_POINTS] = [
    0.0, 12.0, 24.0, 36.0, 48.0, 60.0, 72.0, 84.0, 96.0, 108.0, 120.0,
];

const fn curve_from(values: [f64; NOMOGRAM_POINTS]) -> Curve {
    let mut points = [Breakpoint::new(0.0, 0.0); NOMOGRAM_POINTS];
    let mut i = 0;
    while i < NOMOGRAM_POINTS {
        points[i] = Breakpoint::new(HOURS[i], values[i]);
        i += 1;
    }
    points
}

/// Select the curve for a risk category and treatment.
pub fn curve(risk: BilirubinRiskCategory, curve: NomogramCurve) -> ReferenceTable<'static, f64> {
    let points: &'static [Breakpoint<f64>] = match (risk, curve) {
        (BilirubinRiskCategory::LowRisk, NomogramCurve::Phototherapy) => &PHOTOTHERAPY_LOW_RISK,
        (BilirubinRiskCategory::MediumRisk, NomogramCurve::Phototherapy) => {
            &PHOTOTHERAPY_MEDIUM_RISK
        }
        (BilirubinRiskCategory::HighRisk, NomogramCurve::Phototherapy) => &PHOTOTHERAPY_HIGH_RISK,
        (BilirubinRiskCategory::LowRisk, NomogramCurve::ExchangeTransfusion) => &EXCHANGE_LOW_RISK,
        (BilirubinRiskCategory::MediumRisk, NomogramCurve::ExchangeTransfusion) => {
            &EXCHANGE_MEDIUM_RISK
        }
        (BilirubinRiskCategory::HighRisk, NomogramCurve::ExchangeTransfusion) => {
            &EXCHANGE_HIGH_RISK
        }
    };
    ReferenceTable::new(TableKey::Bilirubin { risk, curve }, points)
}

// Hours:                                  0     12    24    36    48    60    72    84    96    108   120
pub static PHOTOTHERAPY_LOW_RISK: Curve =
    curve_from([5.0, 8.0, 11.0, 13.5, 15.5, 17.0, 18.5, 19.5, 20.5, 21.0, 21.0]);
pub static PHOTOTHERAPY_MEDIUM_RISK: Curve =
    curve_from([4.0, 6.5, 9.0, 11.0, 13.0, 14.5, 15.5, 16.5, 17.0, 17.5, 17.5]);
pub static PHOTOTHERAPY_HIGH_RISK: Curve =
    curve_from([3.0, 5.0, 7.0, 8.5, 10.0, 11.5, 12.5, 13.5, 14.0, 14.5, 14.5]);

pub static EXCHANGE_LOW_RISK: Curve =
    curve_from([8.0, 12.0, 16.0, 19.0, 21.5, 23.0, 24.0, 24.5, 25.0, 25.0, 25.0]);
pub static EXCHANGE_MEDIUM_RISK: Curve =
    curve_from([7.0, 10.0, 13.5, 16.0, 18.0, 19.5, 20.5, 21.0, 21.5, 22.0, 22.0]);
pub static EXCHANGE_HIGH_RISK: Curve =
    curve_from([5.0, 8.0, 11.0, 13.0, 15.0, 16.5, 17.5, 18.0, 18.5, 19.0, 19.0]);
