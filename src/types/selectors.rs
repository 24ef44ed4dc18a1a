//! Categorical selectors: Sex, GrowthMeasurement, HeightPercentile, GestationalAge
//!
//! Every selector is a closed set fixed by the clinical source guideline.
//! Adding a variant means adding the matching reference table, not just a case.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a selector cannot be parsed from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseSelectorError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseSelectorError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Normalise user input so `Late-Preterm`, `late_preterm` and `latepreterm` all match.
fn normalise(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Sex
// ============================================================================

/// Biological sex used to select a reference table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "male" | "m" | "boy" => Ok(Sex::Male),
            "female" | "f" | "girl" => Ok(Sex::Female),
            _ => Err(ParseSelectorError::new("sex", s, "male, female")),
        }
    }
}

// ============================================================================
// Growth Measurement
// ============================================================================

/// Anthropometric measurement scored against the WHO 0-24 month standards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GrowthMeasurement {
    /// Weight-for-age, kilograms
    WeightForAge,
    /// Recumbent length-for-age, centimetres
    LengthForAge,
}

impl GrowthMeasurement {
    pub const ALL: [Self; 2] = [Self::WeightForAge, Self::LengthForAge];

    /// Unit the measurement value must be supplied in
    pub fn unit(&self) -> &'static str {
        match self {
            GrowthMeasurement::WeightForAge => "kg",
            GrowthMeasurement::LengthForAge => "cm",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthMeasurement::WeightForAge => "Weight-for-age",
            GrowthMeasurement::LengthForAge => "Length-for-age",
        }
    }
}

impl std::fmt::Display for GrowthMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GrowthMeasurement {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "weightforage" | "weight" | "wfa" => Ok(GrowthMeasurement::WeightForAge),
            "lengthforage" | "length" | "lfa" => Ok(GrowthMeasurement::LengthForAge),
            _ => Err(ParseSelectorError::new(
                "measurement",
                s,
                "weight-for-age, length-for-age",
            )),
        }
    }
}

// ============================================================================
// Height Percentile (AAP 2017 BP tables)
// ============================================================================

/// Height percentile bracket indexing the AAP 2017 normative BP tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeightPercentile {
    P5,
    P10,
    P25,
    P50,
    P75,
    P90,
    P95,
}

impl HeightPercentile {
    pub const ALL: [Self; 7] = [
        Self::P5,
        Self::P10,
        Self::P25,
        Self::P50,
        Self::P75,
        Self::P90,
        Self::P95,
    ];

    /// Numeric percentile value (5, 10, ..., 95)
    pub fn value(&self) -> u8 {
        match self {
            HeightPercentile::P5 => 5,
            HeightPercentile::P10 => 10,
            HeightPercentile::P25 => 25,
            HeightPercentile::P50 => 50,
            HeightPercentile::P75 => 75,
            HeightPercentile::P90 => 90,
            HeightPercentile::P95 => 95,
        }
    }

    /// Column index into a reference row
    pub fn column(&self) -> usize {
        match self {
            HeightPercentile::P5 => 0,
            HeightPercentile::P10 => 1,
            HeightPercentile::P25 => 2,
            HeightPercentile::P50 => 3,
            HeightPercentile::P75 => 4,
            HeightPercentile::P90 => 5,
            HeightPercentile::P95 => 6,
        }
    }
}

impl TryFrom<u8> for HeightPercentile {
    type Error = ParseSelectorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|hp| hp.value() == value)
            .ok_or_else(|| {
                ParseSelectorError::new(
                    "height percentile",
                    &value.to_string(),
                    "5, 10, 25, 50, 75, 90, 95",
                )
            })
    }
}

impl From<HeightPercentile> for u8 {
    fn from(hp: HeightPercentile) -> Self {
        hp.value()
    }
}

impl std::fmt::Display for HeightPercentile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.value())
    }
}

impl FromStr for HeightPercentile {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = normalise(s);
        let digits = n.strip_prefix('p').unwrap_or(&n);
        digits
            .parse::<u8>()
            .map_err(|_| ParseSelectorError::new("height percentile", s, "5, 10, 25, 50, 75, 90, 95"))
            .and_then(Self::try_from)
    }
}

// ============================================================================
// Gestational Age (bilirubin nomogram)
// ============================================================================

/// Gestational-age bracket for the bilirubin nomogram
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GestationalAge {
    /// >= 38 weeks
    Term,
    /// 35 to 37 6/7 weeks
    LatePreterm,
}

impl GestationalAge {
    pub const ALL: [Self; 2] = [Self::Term, Self::LatePreterm];
}

impl std::fmt::Display for GestationalAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestationalAge::Term => write!(f, "term (>=38 wk)"),
            GestationalAge::LatePreterm => write!(f, "late preterm (35-37 6/7 wk)"),
        }
    }
}

impl FromStr for GestationalAge {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "term" => Ok(GestationalAge::Term),
            "latepreterm" | "preterm" => Ok(GestationalAge::LatePreterm),
            _ => Err(ParseSelectorError::new(
                "gestational age",
                s,
                "term, late-preterm",
            )),
        }
    }
}

// ============================================================================
// Bilirubin Risk Category / Nomogram Curve
// ============================================================================

/// Neurotoxicity risk category selecting a pair of nomogram curves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BilirubinRiskCategory {
    LowRisk,
    MediumRisk,
    HighRisk,
}

impl BilirubinRiskCategory {
    pub const ALL: [Self; 3] = [Self::LowRisk, Self::MediumRisk, Self::HighRisk];
}

impl std::fmt::Display for BilirubinRiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BilirubinRiskCategory::LowRisk => write!(f, "LOW RISK"),
            BilirubinRiskCategory::MediumRisk => write!(f, "MEDIUM RISK"),
            BilirubinRiskCategory::HighRisk => write!(f, "HIGH RISK"),
        }
    }
}

/// Which treatment threshold a nomogram curve describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NomogramCurve {
    Phototherapy,
    ExchangeTransfusion,
}

impl NomogramCurve {
    pub const ALL: [Self; 2] = [Self::Phototherapy, Self::ExchangeTransfusion];
}

impl std::fmt::Display for NomogramCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NomogramCurve::Phototherapy => write!(f, "phototherapy"),
            NomogramCurve::ExchangeTransfusion => write!(f, "exchange transfusion"),
        }
    }
}
